// SPDX-License-Identifier: GPL-3.0-only
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::{debug, info};
use crate::store::SyncStore;
use crate::ui::command::{is_confirmation, parse_command, Command, HELP};
use crate::ui::render::render_table;

/// Line-oriented front end over a `SyncStore`
///
/// Owns the store for the session. Operation failures are reported to the
/// user and the loop keeps going; only I/O errors on the console end it.
pub struct Console<R, W> {
    store: SyncStore,
    input: Lines<R>,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(store: SyncStore, input: R, output: W) -> Self {
        Self {
            store,
            input: input.lines(),
            output,
        }
    }

    pub fn into_store(self) -> SyncStore {
        self.store
    }

    /// Load the collection, then serve commands until `quit` or end of input
    pub async fn run(&mut self) -> anyhow::Result<()> {
        self.reload().await?;

        loop {
            self.write("> ").await?;
            let Some(line) = self.input.next_line().await? else {
                break;
            };

            match parse_command(&line) {
                Ok(None) => {}
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => self.execute(command).await?,
                Err(e) => self.error(&e.to_string()).await?,
            }
        }

        info!("Console session ended");
        Ok(())
    }

    async fn execute(&mut self, command: Command) -> anyhow::Result<()> {
        debug!(command = ?command, "Executing console command");

        match command {
            Command::List => self.render().await,
            Command::Reload => self.reload().await,
            Command::Help => self.write(HELP).await,
            Command::Add { id, title } => {
                match self.store.create(id, &title).await {
                    Ok(_) => self.success("Post added successfully!").await,
                    Err(e) => self.error(&e.to_string()).await,
                }
            }
            Command::Update { remote_key, title } => {
                match self.store.update(&remote_key, &title).await {
                    Ok(_) => self.success("Post updated successfully!").await,
                    Err(e) => self.error(&e.to_string()).await,
                }
            }
            Command::Delete { remote_key } => self.delete(&remote_key).await,
            Command::Quit => Ok(()),
        }
    }

    async fn reload(&mut self) -> anyhow::Result<()> {
        match self.store.load().await {
            Ok(_) => self.success("Posts loaded successfully!").await,
            Err(e) => self.error(&e.to_string()).await,
        }
    }

    async fn delete(&mut self, remote_key: &str) -> anyhow::Result<()> {
        // Unknown keys go straight to the store so the user sees its NotFound error
        if let Some(id) = self.store.get(remote_key).map(|p| p.id) {
            self.write(&format!(
                "Are you sure you want to delete post with ID {id}? [y/N] "
            ))
            .await?;
            let answer = self.input.next_line().await?.unwrap_or_default();
            if !is_confirmation(&answer) {
                return self.write("Delete cancelled.\n").await;
            }
        }

        match self.store.delete(remote_key).await {
            Ok(_) => self.success("Post deleted successfully!").await,
            Err(e) => self.error(&e.to_string()).await,
        }
    }

    async fn success(&mut self, message: &str) -> anyhow::Result<()> {
        self.render().await?;
        self.write(&format!("{message}\n")).await
    }

    async fn error(&mut self, message: &str) -> anyhow::Result<()> {
        self.write(&format!("Error: {message}\n")).await
    }

    async fn render(&mut self) -> anyhow::Result<()> {
        let table = render_table(self.store.posts());
        self.write(&table).await
    }

    async fn write(&mut self, text: &str) -> anyhow::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }
}
