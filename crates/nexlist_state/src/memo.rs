//! MemoPad - local draft of the user's single memo

use chrono::NaiveDate;
use nexlist_client::{ApiError, MemoApi};
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoPad {
    content: String,
    dirty: bool,
    saved_at: Option<NaiveDate>,
}

impl MemoPad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn saved_at(&self) -> Option<NaiveDate> {
        self.saved_at
    }

    /// Replace the draft with the server copy. No memo yet means empty.
    pub async fn load(&mut self, api: &dyn MemoApi) -> Result<(), ApiError> {
        let memo = api.get_memo().await?;
        match memo {
            Some(memo) => {
                self.content = memo.content;
                self.saved_at = memo.saved_at;
            }
            None => {
                debug!("No memo stored yet");
                self.content.clear();
                self.saved_at = None;
            }
        }
        self.dirty = false;
        Ok(())
    }

    pub fn edit(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.content {
            self.content = text;
            self.dirty = true;
        }
    }

    /// Push the draft. Creates the memo when the server has none.
    pub async fn save(&mut self, api: &dyn MemoApi) -> Result<Option<NaiveDate>, ApiError> {
        if !self.dirty {
            return Ok(self.saved_at);
        }

        let saved_at = match api.update_memo(self.content.clone()).await {
            Ok(saved) => Some(saved.saved_at),
            Err(e) if e.is_not_found() => {
                info!("Creating memo");
                api.create_memo(self.content.clone()).await?.saved_at
            }
            Err(e) => return Err(e),
        };

        self.saved_at = saved_at;
        self.dirty = false;
        Ok(saved_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::eq;
    use nexlist_core::{Memo, MemoSaved};

    mock! {
        pub Memos {}

        #[async_trait]
        impl MemoApi for Memos {
            async fn get_memo(&self) -> Result<Option<Memo>, ApiError>;
            async fn create_memo(&self, content: String) -> Result<Memo, ApiError>;
            async fn update_memo(&self, content: String) -> Result<MemoSaved, ApiError>;
        }
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[tokio::test]
    async fn test_load_missing_memo_is_empty() {
        let mut api = MockMemos::new();
        api.expect_get_memo().times(1).returning(|| Ok(None));

        let mut pad = MemoPad::new();
        pad.edit("stale");
        pad.load(&api).await.unwrap();

        assert_eq!(pad.content(), "");
        assert!(!pad.is_dirty());
    }

    #[tokio::test]
    async fn test_save_without_edits_makes_no_request() {
        let mut api = MockMemos::new();
        api.expect_update_memo().never();
        api.expect_create_memo().never();

        let mut pad = MemoPad::new();
        assert_eq!(pad.save(&api).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_updates_existing_memo() {
        let mut api = MockMemos::new();
        api.expect_update_memo()
            .with(eq("call mom".to_string()))
            .times(1)
            .returning(|_| Ok(MemoSaved { saved_at: date(3) }));
        api.expect_create_memo().never();

        let mut pad = MemoPad::new();
        pad.edit("call mom");
        assert_eq!(pad.save(&api).await.unwrap(), Some(date(3)));
        assert!(!pad.is_dirty());
    }

    #[tokio::test]
    async fn test_save_creates_when_server_has_none() {
        let mut api = MockMemos::new();
        api.expect_update_memo().times(1).returning(|_| {
            Err(ApiError::Http {
                status: 404,
                body: r#"{"detail":"Memo Not Found"}"#.to_string(),
            })
        });
        api.expect_create_memo().times(1).returning(|content| {
            Ok(Memo {
                user_id: 1,
                content,
                saved_at: Some(date(4)),
            })
        });

        let mut pad = MemoPad::new();
        pad.edit("first memo");
        assert_eq!(pad.save(&api).await.unwrap(), Some(date(4)));
    }

    #[tokio::test]
    async fn test_failed_save_stays_dirty() {
        let mut api = MockMemos::new();
        api.expect_update_memo().returning(|_| {
            Err(ApiError::Http {
                status: 500,
                body: String::new(),
            })
        });

        let mut pad = MemoPad::new();
        pad.edit("draft");
        assert!(pad.save(&api).await.is_err());
        assert!(pad.is_dirty());
        assert_eq!(pad.content(), "draft");
    }
}
