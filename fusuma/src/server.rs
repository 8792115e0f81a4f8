use crate::content::{AppRequest, ContentRegistry, HostHandle};
use crate::core::State;
use crate::effect::CommandResult;
use crate::render;
use anyhow::{Context, Result};
use fusuma_ipc::{Command, Response};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;

/// Window state plus the hosted applications, mutated only from the event
/// loop.
pub struct Session {
    state: State,
    content: ContentRegistry,
}

impl Session {
    pub fn dispatch(&mut self, command: &Command) -> CommandResult {
        match command {
            Command::GetFrame => {
                let snapshot = self.state.snapshot();
                let frame = render::compose(&snapshot, self.state.catalog(), &self.content);
                Response::Frame { frame }.into()
            }
            _ => {
                let result = self.state.handle_command(command);
                for effect in &result.effects {
                    self.content.apply(effect, &self.state.registry);
                }
                result
            }
        }
    }

    fn handle_line(&mut self, line: &str) -> (Response, bool) {
        let command: Command = match serde_json::from_str(line) {
            Ok(command) => command,
            Err(e) => {
                tracing::warn!("Invalid command {:?}: {}", line, e);
                return (CommandResult::error(format!("invalid command: {}", e)).response, false);
            }
        };
        let quit = command == Command::Quit;
        (self.dispatch(&command).response, quit)
    }

    fn apply_request(&mut self, request: AppRequest) {
        tracing::debug!("Application request: {:?}", request);
        let command = match request {
            AppRequest::SetTitle { window, title } => Command::SetTitle { window, title },
            AppRequest::Open { app, context } => Command::OpenApp { app, context },
            AppRequest::Reply { window, text } => {
                self.content.deliver(&window, &text, &self.state.registry);
                return;
            }
        };
        self.dispatch(&command);
    }
}

pub struct Server {
    session: Session,
    requests: mpsc::UnboundedReceiver<AppRequest>,
}

impl Server {
    pub fn new(state: State) -> Self {
        let (tx, requests) = mpsc::unbounded_channel();
        let content = ContentRegistry::with_builtin(HostHandle::new(tx), state.catalog());
        Self {
            session: Session { state, content },
            requests,
        }
    }

    /// Reads one JSON command per line from `input` and writes one JSON
    /// response per line to `output`, until `quit` or end of input.
    ///
    /// Requests from hosted applications are drained before the next input
    /// line is read, so their effects are visible to the following command.
    pub async fn run<R, W>(self, input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let Server {
            mut session,
            mut requests,
        } = self;
        let mut lines = input.lines();

        loop {
            tokio::select! {
                biased;
                Some(request) = requests.recv() => session.apply_request(request),
                line = lines.next_line() => {
                    let Some(line) = line.context("Failed to read command")? else {
                        tracing::info!("Input closed");
                        break;
                    };
                    if line.trim().is_empty() {
                        continue;
                    }

                    let (response, quit) = session.handle_line(&line);
                    let json = serde_json::to_string(&response)?;
                    output.write_all(json.as_bytes()).await?;
                    output.write_all(b"\n").await?;
                    output.flush().await?;

                    if quit {
                        tracing::info!("Quit requested");
                        break;
                    }
                }
            }
        }

        Ok(())
    }
}
