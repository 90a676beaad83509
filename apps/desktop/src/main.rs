use iced::widget::{button, column, container, row, scrollable, text, text_input};
use iced::{Element, Length, Task, Theme};

use vidscribe_core::{
    ActiveTab, ApiClient, ProcessedVideo, SubmissionController, SubmissionState, SubmissionTicket,
};

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    iced::application(App::new, App::update, App::view)
        .title("Vidscribe")
        .window_size((760.0, 640.0))
        .run()
}

struct App {
    url: String,
    client: ApiClient,
    controller: SubmissionController,
    /// Local validation message; submission state stays untouched when the
    /// URL is empty.
    input_error: Option<String>,
}

#[derive(Debug, Clone)]
enum Message {
    UrlChanged(String),
    Submit,
    Completed(SubmissionTicket, Result<ProcessedVideo, String>),
    TabSelected(ActiveTab),
}

impl App {
    fn new() -> (Self, Task<Message>) {
        (
            Self {
                url: String::new(),
                client: ApiClient::from_env(),
                controller: SubmissionController::new(),
                input_error: None,
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::UrlChanged(url) => {
                self.url = url;
                self.input_error = None;
            }
            Message::Submit => {
                match self.controller.submit(&self.url) {
                    Ok(ticket) => {
                        self.input_error = None;
                        let client = self.client.clone();
                        let url = self.url.clone();
                        return Task::perform(
                            async move { client.process(&url).await.map_err(|e| e.user_message()) },
                            move |outcome| Message::Completed(ticket, outcome),
                        );
                    }
                    Err(err) => self.input_error = Some(err.user_message()),
                }
            }
            Message::Completed(ticket, outcome) => self.controller.resolve(ticket, outcome),
            Message::TabSelected(tab) => self.controller.select_tab(tab),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let submitting = self.controller.is_submitting();

        let mut input = text_input(
            "Paste any video URL here... (YouTube, Instagram, Facebook, TikTok)",
            &self.url,
        );
        if !submitting {
            input = input.on_input(Message::UrlChanged).on_submit(Message::Submit);
        }

        let can_submit = !submitting && !self.url.trim().is_empty();
        let submit = button(text(if submitting {
            "Processing Video..."
        } else {
            "Process Video"
        }))
        .on_press_maybe(can_submit.then_some(Message::Submit))
        .style(button::primary)
        .width(Length::Fill);

        let mut page = column![
            text("Video Processor").size(32),
            text("Transform videos from multiple platforms into transcripts and summaries")
                .size(14),
            text("🎥 YouTube   📸 Instagram   👥 Facebook   🎵 TikTok").size(14),
            input,
            submit,
        ]
        .spacing(12)
        .padding(24);

        if let Some(message) = &self.input_error {
            page = page.push(text(message.as_str()).style(text::danger));
        } else if let Some(status) = self.controller.status_line() {
            let status_style: fn(&Theme) -> text::Style = match self.controller.state() {
                SubmissionState::Failed(_) => text::danger,
                SubmissionState::Succeeded(_) => text::success,
                _ => text::secondary,
            };
            page = page.push(text(status).style(status_style));
        }

        if let Some(video) = self.controller.result() {
            page = page.push(result_card(video, self.controller.active_tab()));
        }

        scrollable(page.width(Length::Fill)).into()
    }
}

fn result_card(video: &ProcessedVideo, active_tab: ActiveTab) -> Element<'_, Message> {
    let badge = text(format!(
        "{} {}",
        video.source_type.badge(),
        video.source_type.label()
    ))
    .size(16);

    let tabs = row![
        tab_button("Transcript", ActiveTab::Transcript, active_tab),
        tab_button("Summary", ActiveTab::Summary, active_tab),
    ]
    .spacing(8);

    let content: Element<'_, Message> = match active_tab {
        ActiveTab::Transcript => column![
            text("Full Transcript").size(18),
            text(video.transcript.as_str()),
        ]
        .spacing(8)
        .into(),
        ActiveTab::Summary => {
            let mut points = column![].spacing(4);
            for point in &video.summary.key_points {
                points = points.push(text(format!("• {point}")));
            }
            column![
                text("Brief Summary").size(18),
                text(video.summary.brief.as_str()),
                text("Key Points").size(18),
                points,
            ]
            .spacing(8)
            .into()
        }
    };

    container(column![badge, tabs, content].spacing(12))
        .padding(16)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

fn tab_button(label: &'static str, tab: ActiveTab, active: ActiveTab) -> Element<'static, Message> {
    let style: fn(&Theme, button::Status) -> button::Style = if tab == active {
        button::primary
    } else {
        button::text
    };
    button(text(label))
        .style(style)
        .on_press(Message::TabSelected(tab))
        .into()
}
