//! Refresh loop for the console bar
//!
//! A tokio task redraws the bar every interval with the latest value sent on
//! a watch channel. Starting an already running loop does nothing; stopping
//! waits for the task and reports any write error it hit.

use crate::console::bar::{BarModel, ConsoleBar};
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::time::Duration;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub struct DrawLoop {
    interval: Duration,
    task: Option<JoinHandle<io::Result<()>>>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl DrawLoop {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            task: None,
            shutdown: None,
        }
    }

    /// Check if the drawing task is running
    pub fn is_alive(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Spawn the drawing task. If it is already running, does nothing.
    pub fn start<W>(
        &mut self,
        bar: ConsoleBar,
        mut model: BarModel,
        mut values: watch::Receiver<f64>,
        mut out: W,
    ) where
        W: Write + Send + 'static,
    {
        if self.is_alive() {
            tracing::debug!("Draw loop already running");
            return;
        }

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
        let interval = self.interval;

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    _ = ticker.tick() => {
                        model.set_value(*values.borrow_and_update());
                        bar.draw(&model, &mut out)?;
                    }
                }
            }

            tracing::debug!("Draw loop stopped at value {}", model.value());
            Ok::<(), io::Error>(())
        });

        tracing::debug!("Draw loop started ({:?} interval)", interval);
        self.task = Some(task);
        self.shutdown = Some(shutdown_tx);
    }

    /// Stop the drawing task and wait for it to finish
    pub async fn stop(&mut self) -> Result<()> {
        if let Some(shutdown) = self.shutdown.take() {
            // Err means the task already exited
            let _ = shutdown.send(());
        }

        if let Some(task) = self.task.take() {
            task.await
                .context("Draw task panicked")?
                .context("Failed to draw console bar")?;
        }

        Ok(())
    }
}
