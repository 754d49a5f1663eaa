// src/application/queries/news/service.rs
use std::sync::Arc;

use crate::domain::{
    comment::CommentRepository, news::NewsReadRepository, rename::RenameRepository,
};

pub struct NewsQueryService {
    pub(super) read_repo: Arc<dyn NewsReadRepository>,
    pub(super) rename_repo: Arc<dyn RenameRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
}

impl NewsQueryService {
    pub fn new(
        read_repo: Arc<dyn NewsReadRepository>,
        rename_repo: Arc<dyn RenameRepository>,
        comment_repo: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            read_repo,
            rename_repo,
            comment_repo,
        }
    }
}
