use tokio::sync::mpsc;

use crate::config::ThemeMode;
use crate::contact::{ContactFlow, ContactIntent, ContactSnapshot};
use crate::content::{filter_projects, Project, ProjectFilter, PROJECTS};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Page {
    #[default]
    Home,
    About,
    Projects,
    Contact,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::About, Page::Projects, Page::Contact];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Projects => "Projects",
            Page::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    fn step(self, delta: isize) -> Self {
        let len = Self::ALL.len() as isize;
        Self::ALL[(self.index() as isize + delta).rem_euclid(len) as usize]
    }
}

/// Work the UI thread hands to the async runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    SubmitContact,
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

pub struct App {
    should_quit: bool,
    page: Page,
    theme: ThemeMode,
    owner: String,
    /// Latest frame pushed by the typewriter task.
    typewriter_text: String,
    project_filter: ProjectFilter,
    scroll: u16,
    contact: ContactFlow,
    commands: Option<UiCommandSender>,
    notice: Option<String>,
}

impl App {
    pub fn new(owner: impl Into<String>, theme: ThemeMode, contact: ContactFlow) -> Self {
        Self {
            should_quit: false,
            page: Page::default(),
            theme,
            owner: owner.into(),
            typewriter_text: String::new(),
            project_filter: ProjectFilter::default(),
            scroll: 0,
            contact,
            commands: None,
            notice: None,
        }
    }

    pub fn attach_commands(&mut self, sender: UiCommandSender) {
        self.commands = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn set_page(&mut self, page: Page) {
        if self.page != page {
            self.page = page;
            self.scroll = 0;
            self.notice = None;
        }
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.step(1));
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.step(-1));
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn typewriter_text(&self) -> &str {
        &self.typewriter_text
    }

    pub fn on_typewriter_frame(&mut self, text: String) {
        self.typewriter_text = text;
    }

    /// Typewriter is unmounted whenever the home page is not shown.
    pub fn on_typewriter_unmounted(&mut self) {
        self.typewriter_text.clear();
    }

    pub fn project_filter(&self) -> ProjectFilter {
        self.project_filter
    }

    pub fn next_filter(&mut self) {
        self.project_filter = self.project_filter.next();
        self.scroll = 0;
    }

    pub fn prev_filter(&mut self) {
        self.project_filter = self.project_filter.prev();
        self.scroll = 0;
    }

    pub fn visible_projects(&self) -> Vec<&'static Project> {
        filter_projects(PROJECTS, self.project_filter)
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn contact(&self) -> &ContactFlow {
        &self.contact
    }

    pub fn contact_snapshot(&self) -> ContactSnapshot {
        self.contact.snapshot()
    }

    pub fn dispatch_contact(&mut self, intent: ContactIntent) {
        self.notice = None;
        self.contact.dispatch(intent);
    }

    /// Inline hint shown under the form, e.g. a blank required field.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Ask the runtime to submit the contact form.
    ///
    /// Blank fields are refused here, mirroring a `required` input: focus
    /// moves to the first one and nothing is sent.
    pub fn submit_contact(&mut self) {
        let snapshot = self.contact.snapshot();
        if snapshot.is_submitting {
            return;
        }

        if let Some(field) = snapshot.form_data.first_missing() {
            self.contact.dispatch(ContactIntent::Focus(field));
            self.notice = Some(format!("Please fill in the {} field.", field.label()));
            return;
        }

        self.notice = None;
        let Some(commands) = &self.commands else {
            tracing::warn!("Contact submit requested but no command channel is attached");
            return;
        };
        if let Err(err) = commands.try_send(UiCommand::SubmitContact) {
            tracing::warn!(error = %err, "Failed to queue contact submission");
        }
    }
}
