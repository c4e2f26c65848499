//
//  freshdesk-cli
//  cli/solution.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Knowledge-base commands.
//!
//! Folders live under a category and articles under a folder, so those
//! subcommands take the parent IDs as options:
//!
//! ```text
//! fdesk solution category list
//! fdesk solution folder --category 3 list
//! fdesk solution article --category 3 --folder 7 view 42
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::ResourceId;

use super::resource::CrudSubcommand;
use super::{GlobalOptions, Session};

const CATEGORY_COLUMNS: &[&str] = &["id", "name", "description", "position"];
const FOLDER_COLUMNS: &[&str] = &["id", "name", "visibility", "position"];
const ARTICLE_COLUMNS: &[&str] = &["id", "title", "status", "art_type"];

/// Manage the knowledge base.
#[derive(Args, Debug)]
pub struct SolutionCommand {
    #[command(subcommand)]
    pub command: SolutionSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SolutionSubcommand {
    /// Manage solution categories
    Category {
        #[command(subcommand)]
        command: CrudSubcommand,
    },

    /// Manage folders of a category
    Folder {
        /// Category ID
        #[arg(long, short = 'c')]
        category: String,

        #[command(subcommand)]
        command: CrudSubcommand,
    },

    /// Manage articles of a folder
    Article {
        /// Category ID
        #[arg(long, short = 'c')]
        category: String,

        /// Folder ID
        #[arg(long, short = 'f')]
        folder: String,

        #[command(subcommand)]
        command: CrudSubcommand,
    },
}

impl SolutionCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = Session::from_global(global)?;
        let client = &session.client;
        let output = &session.output;

        match &self.command {
            SolutionSubcommand::Category { command } => {
                command
                    .run(&client.solution_categories(), output, CATEGORY_COLUMNS)
                    .await
            }
            SolutionSubcommand::Folder { category, command } => {
                let folders = client.solution_folders(ResourceId::from(category.as_str()));
                command.run(&folders, output, FOLDER_COLUMNS).await
            }
            SolutionSubcommand::Article {
                category,
                folder,
                command,
            } => {
                let articles = client.solution_articles(
                    ResourceId::from(category.as_str()),
                    ResourceId::from(folder.as_str()),
                );
                command.run(&articles, output, ARTICLE_COLUMNS).await
            }
        }
    }
}
