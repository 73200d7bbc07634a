//! The event loop that performs `App` tasks.
//!
//! # Design
//! Gateway calls and notice timers run as spawned tasks that report back
//! over one channel, tagged with the generation that started them. Input is
//! read only while no call is in flight, so a piped script sees each
//! response before its next line runs. End of input stops the loop.

use std::sync::Arc;
use std::time::Duration;

use animales_core::{Call, Gateway, Outcome, Ticket, Transport};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;

use crate::app::{App, Generation, Task};

#[derive(Debug)]
enum Event {
    Outcome {
        generation: Generation,
        outcome: Outcome,
    },
    Timer {
        generation: Generation,
        ticket: Ticket,
    },
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub async fn run<T, R, W>(
    mut app: App,
    gateway: Arc<Gateway<T>>,
    input: R,
    mut output: W,
) -> anyhow::Result<()>
where
    T: Transport + Send + Sync + 'static,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut lines = input.lines();
    let mut in_flight = 0usize;
    let mut tasks = app.start();

    loop {
        if perform(tasks, &gateway, &tx, &mut output, &mut in_flight).await? == Flow::Quit {
            break;
        }
        tasks = tokio::select! {
            line = lines.next_line(), if in_flight == 0 => match line? {
                Some(line) => app.handle_line(&line),
                None => {
                    tracing::debug!("end of input");
                    break;
                }
            },
            Some(event) = rx.recv() => match event {
                Event::Outcome { generation, outcome } => {
                    in_flight = in_flight.saturating_sub(1);
                    app.handle_outcome(generation, outcome)
                }
                Event::Timer { generation, ticket } => app.handle_timer(generation, ticket),
            },
        };
    }
    output.flush().await?;
    Ok(())
}

async fn perform<T, W>(
    tasks: Vec<Task>,
    gateway: &Arc<Gateway<T>>,
    tx: &mpsc::UnboundedSender<Event>,
    output: &mut W,
    in_flight: &mut usize,
) -> anyhow::Result<Flow>
where
    T: Transport + Send + Sync + 'static,
    W: AsyncWrite + Unpin,
{
    for task in tasks {
        match task {
            Task::Call { generation, call } => {
                *in_flight += 1;
                spawn_call(Arc::clone(gateway), tx.clone(), generation, call);
            }
            Task::Timer {
                generation,
                ticket,
                delay,
            } => spawn_timer(tx.clone(), generation, ticket, delay),
            Task::Print(text) => {
                output.write_all(text.as_bytes()).await?;
                if !text.ends_with('\n') {
                    output.write_all(b"\n").await?;
                }
                output.flush().await?;
            }
            Task::Quit => return Ok(Flow::Quit),
        }
    }
    Ok(Flow::Continue)
}

fn spawn_call<T>(
    gateway: Arc<Gateway<T>>,
    tx: mpsc::UnboundedSender<Event>,
    generation: Generation,
    call: Call,
) where
    T: Transport + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let outcome = gateway.dispatch(call).await;
        // The loop may already be gone after `quit`.
        let _ = tx.send(Event::Outcome {
            generation,
            outcome,
        });
    });
}

fn spawn_timer(
    tx: mpsc::UnboundedSender<Event>,
    generation: Generation,
    ticket: Ticket,
    delay: Duration,
) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = tx.send(Event::Timer { generation, ticket });
    });
}
