//
//  freshdesk-cli
//  api/solutions.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Solutions (knowledge base) API
//!
//! The knowledge base is a three-level hierarchy:
//!
//! | Level | Path | Envelope |
//! |-------|------|----------|
//! | Category | `/solution/categories.json` | `solution_category` |
//! | Folder | `/solution/categories/{c}/folders.json` | `solution_folder` |
//! | Article | `/solution/categories/{c}/folders/{f}/articles.json` | `solution_article` |
//!
//! The server often answers with the short key (`category`, `folder`,
//! `article`); unwrapping falls back to it automatically.
//!
//! # Example
//!
//! ```rust,no_run
//! use freshdesk_cli::api::FreshdeskClient;
//!
//! # async fn example() -> Result<(), freshdesk_cli::api::ApiError> {
//! let client = FreshdeskClient::new("https://acme.freshdesk.com", "key")?;
//! let article = client.solution_articles(3u64, 9u64).get(12u64).await?;
//! println!("{}", article["title"]);
//! # Ok(())
//! # }
//! ```

use crate::api::client::FreshdeskClient;
use crate::api::endpoint::{ResourceId, SOLUTION_ARTICLES, SOLUTION_CATEGORIES, SOLUTION_FOLDERS};
use crate::api::resource::Resource;

impl FreshdeskClient {
    /// Solution categories.
    pub fn solution_categories(&self) -> Resource<'_> {
        Resource::new(self, SOLUTION_CATEGORIES)
    }

    /// Folders of one solution category.
    pub fn solution_folders(&self, category: impl Into<ResourceId>) -> Resource<'_> {
        Resource::nested(self, SOLUTION_FOLDERS, vec![category.into()])
    }

    /// Articles of one folder.
    pub fn solution_articles(
        &self,
        category: impl Into<ResourceId>,
        folder: impl Into<ResourceId>,
    ) -> Resource<'_> {
        Resource::nested(self, SOLUTION_ARTICLES, vec![category.into(), folder.into()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_paths() {
        let client = FreshdeskClient::new("https://acme.freshdesk.com", "key").unwrap();

        assert_eq!(
            client.solution_categories().endpoint(Some(&4u64.into())).unwrap(),
            "/solution/categories/4.json"
        );
        assert_eq!(
            client.solution_folders(3u64).endpoint(None).unwrap(),
            "/solution/categories/3/folders.json"
        );
        assert_eq!(
            client.solution_articles(3u64, "9").endpoint(Some(&12u64.into())).unwrap(),
            "/solution/categories/3/folders/9/articles/12.json"
        );
    }
}
