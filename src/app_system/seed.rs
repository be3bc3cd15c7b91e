//! Demo records loaded at startup. They go through the same clients as API
//! requests, so they get fresh ids and the usual validation.

use tracing::info;

use crate::category_actor::CategoryCreate;
use crate::error::StoreResult;
use crate::post_actor::PostCreate;
use crate::product_actor::ProductCreate;
use crate::user_actor::UserCreate;

use super::AppSystem;

fn user(name: &str, email: &str, age: u32) -> UserCreate {
    UserCreate {
        name: Some(name.into()),
        email: Some(email.into()),
        age: Some(age),
        ..Default::default()
    }
}

fn product(name: &str, price: f64, category: &str) -> ProductCreate {
    ProductCreate {
        name: Some(name.into()),
        price: Some(price),
        category: Some(category.into()),
        in_stock: Some(true),
    }
}

fn tags(raw: &[&str]) -> Option<Vec<String>> {
    Some(raw.iter().map(|t| t.to_string()).collect())
}

pub(super) async fn seed_sample_data(system: &AppSystem) -> StoreResult<()> {
    let admin = system
        .user_client
        .create_user(UserCreate {
            username: Some("admin".into()),
            password: Some("admin123".into()),
            role: Some("admin".into()),
            ..user("Admin", "admin@blog.com", 0)
        })
        .await?;

    // John Doe doubles as the blog's `john_doe` author; both share one email.
    let john = system
        .user_client
        .create_user(UserCreate {
            username: Some("john_doe".into()),
            password: Some("password123".into()),
            role: Some("author".into()),
            ..user("John Doe", "john@example.com", 30)
        })
        .await?;
    system.user_client.create_user(user("Jane Smith", "jane@example.com", 25)).await?;

    system.product_client.create_product(product("Laptop", 999.99, "Electronics")).await?;
    system.product_client.create_product(product("Coffee Mug", 12.99, "Kitchen")).await?;

    system
        .post_client
        .create_post(PostCreate {
            title: Some("Getting Started with Flask".into()),
            content: Some(
                "Flask is a lightweight web framework for Python that makes it easy to build web \
                 applications. In this post, we'll explore the basics of Flask and how to create \
                 your first application."
                    .into(),
            ),
            author_id: Some(admin.id.clone()),
            tags: tags(&["python", "flask", "web-development"]),
        })
        .await?;
    system
        .post_client
        .create_post(PostCreate {
            title: Some("Building REST APIs with Flask".into()),
            content: Some(
                "REST APIs are essential for modern web applications. Learn how to build robust \
                 APIs using Flask-RESTful and best practices for API design."
                    .into(),
            ),
            author_id: Some(john.id.clone()),
            tags: tags(&["api", "rest", "flask", "python"]),
        })
        .await?;

    for (name, color) in [("Work", "#3498db"), ("Personal", "#2ecc71"), ("Shopping", "#e67e22")] {
        system
            .category_client
            .create_category(CategoryCreate {
                name: Some(name.into()),
                color: Some(color.into()),
            })
            .await?;
    }

    info!("Sample data loaded");
    Ok(())
}
