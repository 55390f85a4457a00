//! Application service between the HTTP boundary and the upstream client.
//!
//! Pure delegation: every operation forwards to the matching [`TodoApi`]
//! call and returns its result unchanged. The layer exists so routing code
//! depends on a stable internal API instead of the transport, which keeps
//! the downstream client swappable for a test double.

use std::sync::Arc;

use crate::upstream::{Todo, TodoApi, TodoStream, UpstreamResult};

/// Thin orchestration layer over the downstream client. Holds no state
/// beyond the client handle.
#[derive(Clone)]
pub struct TodoService {
    api: Arc<dyn TodoApi>,
}

impl TodoService {
    /// Create a service backed by the given downstream client.
    pub fn new(api: Arc<dyn TodoApi>) -> Self {
        Self { api }
    }

    /// The full todo collection.
    pub async fn todos(&self) -> UpstreamResult<TodoStream> {
        self.api.fetch_all().await
    }

    /// A single todo by id.
    pub async fn todo_by_id(&self, id: i64) -> UpstreamResult<Todo> {
        self.api.fetch_by_id(id).await
    }

    /// The todos belonging to one user.
    pub async fn todos_by_user_id(&self, user_id: i64) -> UpstreamResult<TodoStream> {
        self.api.fetch_by_user_id(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use async_trait::async_trait;
    use futures_util::{stream, StreamExt};

    use super::*;
    use crate::upstream::UpstreamError;

    #[derive(Default)]
    struct FakeApi {
        all_calls: AtomicU32,
        by_id_calls: AtomicU32,
        by_user_calls: AtomicU32,
    }

    fn sample_todo(id: i64) -> Todo {
        Todo {
            user_id: 1,
            id,
            title: format!("todo {id}"),
            completed: false,
        }
    }

    #[async_trait]
    impl TodoApi for FakeApi {
        async fn fetch_all(&self) -> UpstreamResult<TodoStream> {
            self.all_calls.fetch_add(1, Ordering::SeqCst);
            Ok(stream::iter(vec![Ok(sample_todo(1)), Ok(sample_todo(2))]).boxed())
        }

        async fn fetch_by_id(&self, id: i64) -> UpstreamResult<Todo> {
            self.by_id_calls.fetch_add(1, Ordering::SeqCst);
            if id == 99 {
                Err(UpstreamError::NotFound)
            } else {
                Ok(sample_todo(id))
            }
        }

        async fn fetch_by_user_id(&self, _user_id: i64) -> UpstreamResult<TodoStream> {
            self.by_user_calls.fetch_add(1, Ordering::SeqCst);
            Ok(stream::iter(Vec::<UpstreamResult<Todo>>::new()).boxed())
        }
    }

    #[tokio::test]
    async fn test_delegation_is_one_to_one() {
        let api = Arc::new(FakeApi::default());
        let service = TodoService::new(api.clone());

        let todos: Vec<_> = service.todos().await.unwrap().collect().await;
        assert_eq!(todos.len(), 2);
        assert_eq!(api.all_calls.load(Ordering::SeqCst), 1);

        let todo = service.todo_by_id(7).await.unwrap();
        assert_eq!(todo.id, 7);
        assert_eq!(api.by_id_calls.load(Ordering::SeqCst), 1);

        let empty: Vec<_> = service.todos_by_user_id(3).await.unwrap().collect().await;
        assert!(empty.is_empty());
        assert_eq!(api.by_user_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_errors_pass_through_unchanged() {
        let service = TodoService::new(Arc::new(FakeApi::default()));
        let err = service.todo_by_id(99).await.unwrap_err();
        assert!(matches!(err, UpstreamError::NotFound));
    }
}
