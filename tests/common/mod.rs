#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use bloglist::config::SecuritySettings;
use bloglist::domain::entities::{
    Blog, BlogOwner, BlogRecord, BlogUpdate, NewBlog, NewUser, User,
};
use bloglist::domain::repositories::{BlogRepository, UserRepository};
use bloglist::error::AppError;
use bloglist::routes::router;
use bloglist::state::AppState;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::{Arc, Mutex};

pub const TEST_SECRET: &str = "test-signing-secret";

pub fn test_security() -> SecuritySettings {
    SecuritySettings {
        token_secret: TEST_SECRET.to_string(),
        token_ttl_seconds: 3600,
        bcrypt_cost: 4,
    }
}

struct StoredBlog {
    id: i64,
    title: String,
    author: Option<String>,
    url: String,
    likes: u64,
    user_id: Option<i64>,
    created_at: DateTime<Utc>,
}

#[derive(Default)]
struct Store {
    users: Vec<User>,
    blogs: Vec<StoredBlog>,
    next_user_id: i64,
    next_blog_id: i64,
}

impl Store {
    fn resolve(&self, blog: &StoredBlog) -> Blog {
        let owner = blog
            .user_id
            .and_then(|id| self.users.iter().find(|u| u.id == id))
            .map(|u| BlogOwner {
                id: u.id,
                username: u.username.clone(),
                name: u.name.clone(),
            });

        Blog {
            id: blog.id,
            title: blog.title.clone(),
            author: blog.author.clone(),
            url: blog.url.clone(),
            likes: blog.likes,
            owner,
            created_at: blog.created_at,
        }
    }
}

/// Users and blogs held in memory, shared by both repositories so owners
/// resolve the way the SQL join does.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<Mutex<Store>>,
}

pub struct InMemoryBlogRepository {
    store: InMemoryStore,
}

pub struct InMemoryUserRepository {
    store: InMemoryStore,
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn create(&self, new_blog: NewBlog) -> Result<Blog, AppError> {
        let mut store = self.store.inner.lock().unwrap();
        store.next_blog_id += 1;

        let blog = StoredBlog {
            id: store.next_blog_id,
            title: new_blog.title,
            author: new_blog.author,
            url: new_blog.url,
            likes: new_blog.likes,
            user_id: new_blog.user_id,
            created_at: Utc::now(),
        };
        let created = store.resolve(&blog);
        store.blogs.push(blog);

        Ok(created)
    }

    async fn list(&self) -> Result<Vec<Blog>, AppError> {
        let store = self.store.inner.lock().unwrap();
        Ok(store.blogs.iter().map(|b| store.resolve(b)).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Blog>, AppError> {
        let store = self.store.inner.lock().unwrap();
        Ok(store
            .blogs
            .iter()
            .find(|b| b.id == id)
            .map(|b| store.resolve(b)))
    }

    async fn update(&self, id: i64, update: BlogUpdate) -> Result<Option<Blog>, AppError> {
        let mut store = self.store.inner.lock().unwrap();
        let Some(index) = store.blogs.iter().position(|b| b.id == id) else {
            return Ok(None);
        };

        let blog = &mut store.blogs[index];
        blog.title = update.title;
        blog.author = update.author;
        blog.url = update.url;
        blog.likes = update.likes;

        Ok(Some(store.resolve(&store.blogs[index])))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut store = self.store.inner.lock().unwrap();
        let before = store.blogs.len();
        store.blogs.retain(|b| b.id != id);
        Ok(store.blogs.len() < before)
    }

    async fn list_records(&self) -> Result<Vec<BlogRecord>, AppError> {
        let store = self.store.inner.lock().unwrap();
        Ok(store
            .blogs
            .iter()
            .map(|b| store.resolve(b).to_record())
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.store.inner.lock().unwrap().blogs.len() as i64)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut store = self.store.inner.lock().unwrap();
        if store.users.iter().any(|u| u.username == new_user.username) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "users_username_key" }),
            ));
        }

        store.next_user_id += 1;
        let user = User {
            id: store.next_user_id,
            username: new_user.username,
            name: new_user.name,
            password_hash: new_user.password_hash,
            created_at: Utc::now(),
        };
        store.users.push(user.clone());

        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.store.inner.lock().unwrap().users.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let store = self.store.inner.lock().unwrap();
        Ok(store.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let store = self.store.inner.lock().unwrap();
        Ok(store.users.iter().find(|u| u.username == username).cloned())
    }
}

/// Blog repository whose every call fails, for degraded-path tests.
pub struct FailingBlogRepository;

fn db_down() -> AppError {
    AppError::internal("Database error", json!({}))
}

#[async_trait]
impl BlogRepository for FailingBlogRepository {
    async fn create(&self, _new_blog: NewBlog) -> Result<Blog, AppError> {
        Err(db_down())
    }
    async fn list(&self) -> Result<Vec<Blog>, AppError> {
        Err(db_down())
    }
    async fn find_by_id(&self, _id: i64) -> Result<Option<Blog>, AppError> {
        Err(db_down())
    }
    async fn update(&self, _id: i64, _update: BlogUpdate) -> Result<Option<Blog>, AppError> {
        Err(db_down())
    }
    async fn delete(&self, _id: i64) -> Result<bool, AppError> {
        Err(db_down())
    }
    async fn list_records(&self) -> Result<Vec<BlogRecord>, AppError> {
        Err(db_down())
    }
    async fn count(&self) -> Result<i64, AppError> {
        Err(db_down())
    }
}

pub fn create_test_state() -> AppState {
    let store = InMemoryStore::default();

    AppState::new(
        Arc::new(InMemoryBlogRepository {
            store: store.clone(),
        }),
        Arc::new(InMemoryUserRepository { store }),
        &test_security(),
    )
}

pub fn create_failing_state() -> AppState {
    AppState::new(
        Arc::new(FailingBlogRepository),
        Arc::new(InMemoryUserRepository {
            store: InMemoryStore::default(),
        }),
        &test_security(),
    )
}

/// Full router over in-memory storage, without rate limiting.
pub fn create_test_server() -> (TestServer, AppState) {
    let state = create_test_state();
    let server = TestServer::new(router(state.clone(), false)).unwrap();
    (server, state)
}

pub async fn create_test_user(state: &AppState, username: &str, password: &str) -> User {
    state
        .user_service
        .register(
            username.to_string(),
            format!("{username} name"),
            password.to_string(),
        )
        .await
        .unwrap()
}

pub async fn login_token(state: &AppState, username: &str, password: &str) -> String {
    state
        .auth_service
        .login(username, password.to_string())
        .await
        .unwrap()
        .token
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub async fn create_test_blog(
    state: &AppState,
    owner: &User,
    title: &str,
    author: &str,
    likes: u64,
) -> Blog {
    state
        .blog_service
        .create_blog(
            NewBlog {
                title: title.to_string(),
                author: Some(author.to_string()),
                url: format!("https://example.com/{}", title.replace(' ', "-")),
                likes,
                user_id: None,
            },
            owner,
        )
        .await
        .unwrap()
}

/// The six-blog list used across the statistics tests.
pub const SAMPLE_BLOGS: [(&str, &str, u64); 6] = [
    ("React patterns", "Michael Chan", 7),
    ("Go To Statement Considered Harmful", "Edsger W. Dijkstra", 5),
    ("Canonical string reduction", "Edsger W. Dijkstra", 12),
    ("First class tests", "Robert C. Martin", 10),
    ("TDD harms architecture", "Robert C. Martin", 0),
    ("Type wars", "Robert C. Martin", 2),
];

pub async fn seed_sample_blogs(state: &AppState, owner: &User) {
    for (title, author, likes) in SAMPLE_BLOGS {
        create_test_blog(state, owner, title, author, likes).await;
    }
}

pub async fn insert_test_user(pool: &PgPool, username: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO users (username, name, password_hash) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(username)
    .bind(format!("{username} name"))
    .bind("$2b$04$invalidinvalidinvalidinvalidinvalidinvalidinvalidinva")
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_test_blog(
    pool: &PgPool,
    title: &str,
    author: Option<&str>,
    likes: i64,
    user_id: Option<i64>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO blogs (title, author, url, likes, user_id) VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(title)
    .bind(author)
    .bind(format!("https://example.com/{}", title.replace(' ', "-")))
    .bind(likes)
    .bind(user_id)
    .fetch_one(pool)
    .await
    .unwrap()
}
