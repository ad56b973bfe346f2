// SPDX-License-Identifier: MPL-2.0
//! Interactive gallery of every toast kind and position.
//!
//! Run with `cargo run --example gallery -- [--position bottom-left] [--duration 5000]`.

use iced::widget::{button, column, row, text, Container};
use iced::{Element, Length, Subscription, Task};
use iced_toasts::{config, Config, Kind, Position, ToastOptions, ToastProvider};
use std::cell::RefCell;

#[derive(Debug, Clone)]
enum Message {
    Show(Kind),
    SetPosition(Position),
    ToggleMounted,
    Toast(iced_toasts::Message),
}

struct Gallery {
    toasts: ToastProvider,
    position: Position,
    duration_ms: Option<u64>,
    last_error: Option<String>,
}

struct Flags {
    position: Option<Position>,
    duration_ms: Option<u64>,
}

impl Gallery {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match config::load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "falling back to default toast config");
                Config::default()
            }
        };
        let position = flags
            .position
            .or(config.default_position)
            .unwrap_or_default();

        let gallery = Self {
            toasts: ToastProvider::new(config),
            position,
            duration_ms: flags.duration_ms,
            last_error: None,
        };
        (gallery, Task::none())
    }

    fn title(&self) -> String {
        String::from("Toast gallery")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Show(kind) => {
                let mut options = ToastOptions::new().position(self.position);
                if let Some(ms) = self.duration_ms {
                    options = options.duration_ms(ms);
                }
                let body = format!("A {kind} toast at {}", self.position);
                match self.toasts.notifier() {
                    Ok(mut notify) => {
                        match kind {
                            Kind::Success => notify.success(body, options),
                            Kind::Error => notify.error(body, options),
                            Kind::Warning => notify.warning(body, options),
                            Kind::Info => notify.info(body, options),
                        };
                        self.last_error = None;
                    }
                    Err(err) => self.last_error = Some(err.to_string()),
                }
            }
            Message::SetPosition(position) => self.position = position,
            Message::ToggleMounted => {
                if self.toasts.is_mounted() {
                    self.toasts.unmount();
                } else {
                    self.toasts.mount();
                }
            }
            Message::Toast(message) => self.toasts.update(message),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let kinds = Kind::ALL.into_iter().fold(row![].spacing(8), |row, kind| {
            row.push(button(text(kind.to_string())).on_press(Message::Show(kind)))
        });
        let positions = Position::ALL
            .into_iter()
            .fold(row![].spacing(8), |row, position| {
                let label = if position == self.position {
                    format!("[{position}]")
                } else {
                    position.to_string()
                };
                row.push(button(text(label)).on_press(Message::SetPosition(position)))
            });
        let mount_label = if self.toasts.is_mounted() {
            "Unmount provider"
        } else {
            "Mount provider"
        };

        let mut content = column![
            kinds,
            positions,
            button(text(mount_label)).on_press(Message::ToggleMounted),
        ]
        .spacing(16);
        if let Some(err) = &self.last_error {
            content = content.push(text(err.as_str()));
        }

        let content = Container::new(content).center(Length::Fill);

        self.toasts.view(content, Message::Toast)
    }

    fn subscription(&self) -> Subscription<Message> {
        self.toasts.subscription().map(Message::Toast)
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        position: args.opt_value_from_str("--position").unwrap_or_else(|err| {
            eprintln!("{err}");
            None
        }),
        duration_ms: args.opt_value_from_str("--duration").unwrap_or_else(|err| {
            eprintln!("{err}");
            None
        }),
    };

    // iced requires an Fn boot closure, flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or(Flags {
            position: None,
            duration_ms: None,
        });
        Gallery::new(flags)
    };

    iced::application(boot, Gallery::update, Gallery::view)
        .title(Gallery::title)
        .subscription(Gallery::subscription)
        .run()
}
