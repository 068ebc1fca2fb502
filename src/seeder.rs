//! Startup sample-data seeder
//!
//! Populates the books table with five fixed records when it is empty.
//! Idempotent by the count guard; takes the repository as an injected
//! dependency instead of holding any global state.

use chrono::Utc;
use rust_decimal::Decimal;

use crate::{error::AppResult, models::book::NewBook, repository::BookRepository};

/// Seed sample books if the table is empty
pub async fn run(repository: &dyn BookRepository) -> AppResult<()> {
    let count = repository.count().await?;
    if count > 0 {
        tracing::info!(
            "Database already contains {} books. Skipping initialization.",
            count
        );
        return Ok(());
    }

    tracing::info!("Initializing sample book data...");
    for book in sample_books() {
        repository.insert(&book).await?;
    }

    let total = repository.count().await?;
    tracing::info!("Sample data initialization complete. {} books added.", total);
    Ok(())
}

fn sample_books() -> Vec<NewBook> {
    let now = Utc::now();
    let book = |title: &str,
                author: &str,
                isbn: &str,
                price: Decimal,
                description: &str,
                published_year: i32,
                quantity: i32| NewBook {
        title: title.to_string(),
        author: author.to_string(),
        isbn: isbn.to_string(),
        price,
        description: Some(description.to_string()),
        published_year: Some(published_year),
        quantity,
        created_at: now,
        updated_at: now,
    };

    vec![
        book(
            "Clean Code",
            "Robert C. Martin",
            "978-0132350884",
            Decimal::new(3499, 2),
            "A Handbook of Agile Software Craftsmanship",
            2008,
            50,
        ),
        book(
            "Design Patterns",
            "Gang of Four",
            "978-0201633610",
            Decimal::new(4999, 2),
            "Elements of Reusable Object-Oriented Software",
            1994,
            30,
        ),
        book(
            "The Pragmatic Programmer",
            "David Thomas, Andrew Hunt",
            "978-0135957059",
            Decimal::new(4499, 2),
            "Your Journey to Mastery, 20th Anniversary Edition",
            2019,
            40,
        ),
        book(
            "Docker Deep Dive",
            "Nigel Poulton",
            "978-1916585256",
            Decimal::new(2999, 2),
            "Zero to Docker in a single book",
            2023,
            25,
        ),
        book(
            "Kubernetes in Action",
            "Marko Luksa",
            "978-1617293726",
            Decimal::new(5999, 2),
            "Comprehensive guide to container orchestration",
            2018,
            35,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::book::Book;
    use crate::repository::MockBookRepository;

    #[tokio::test]
    async fn seeds_five_books_into_empty_store() {
        let mut repo = MockBookRepository::new();
        repo.expect_count().times(1).returning(|| Ok(0));
        repo.expect_insert().times(5).returning(|book| {
            Ok(Book {
                id: 1,
                title: book.title.clone(),
                author: book.author.clone(),
                isbn: book.isbn.clone(),
                price: book.price,
                description: book.description.clone(),
                published_year: book.published_year,
                quantity: book.quantity,
                created_at: book.created_at,
                updated_at: book.updated_at,
            })
        });
        repo.expect_count().times(1).returning(|| Ok(5));

        run(&repo).await.unwrap();
    }

    #[tokio::test]
    async fn skips_non_empty_store() {
        let mut repo = MockBookRepository::new();
        repo.expect_count().times(1).returning(|| Ok(5));
        repo.expect_insert().never();

        run(&repo).await.unwrap();
    }

    #[test]
    fn sample_data_is_the_fixed_catalog() {
        let books = sample_books();
        let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Clean Code",
                "Design Patterns",
                "The Pragmatic Programmer",
                "Docker Deep Dive",
                "Kubernetes in Action",
            ]
        );
        assert!(books.iter().all(|b| b.price > Decimal::ZERO));
        assert!(books.iter().all(|b| b.created_at == b.updated_at));
    }
}
