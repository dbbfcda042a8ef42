mod modals;

use std::{
    collections::HashSet,
    sync::Arc,
    time::{
        Duration,
        Instant,
    },
};

use eframe::egui;
use modals::Modals;

use super::{
    browse_view::browse_view,
    card_widget::CardAction,
    quiz_view::quiz_view,
    random_view::random_view,
    settings_modal::Settings,
    theme::{
        set_theme,
        Theme,
    },
    toasts::Toasts,
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::{
    api::ApiClient,
    core::{
        models::StudyMode,
        study::StudyState,
        tasks::{
            TaskManager,
            TaskResult,
        },
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
    speech::{
        SpeechBackend,
        SystemSpeech,
    },
};

const SETTINGS_FILE: &str = "settings.json";
const API_CHECK_INTERVAL: Duration = Duration::from_secs(10);

pub struct CardboxApp {
    // Configuration
    settings: Settings,
    set_id_input: String,

    // Study state
    study: StudyState,

    // UI state
    theme: Theme,
    toasts: Toasts,
    modals: Modals,

    // External services
    api: ApiClient,
    speech: Arc<dyn SpeechBackend>,
    speech_busy: HashSet<u64>,
    api_online: bool,
    last_api_check: Option<Instant>,

    // In-flight work
    pending_load: bool,
    pending_deletes: usize,
    task_manager: TaskManager,
}

impl CardboxApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_json_or_default::<Settings>(SETTINGS_FILE);
        let api = ApiClient::new(&settings.base_url);
        let task_manager = TaskManager::new();

        let mut app = Self {
            set_id_input: settings.set_id.clone(),
            settings,
            study: StudyState::new(),
            theme: Theme::dracula(),
            toasts: Toasts::default(),
            modals: Modals::default(),
            api,
            speech: Arc::new(SystemSpeech),
            speech_busy: HashSet::new(),
            api_online: false,
            last_api_check: None,
            pending_load: false,
            pending_deletes: 0,
            task_manager,
        };

        set_theme(&cc.egui_ctx, &app.theme);
        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + 0.2);

        // Pick up where the last session left off.
        app.reload_cards();

        app
    }

    fn can_edit(&self) -> bool {
        self.settings.view.is_editable() && !self.settings.set_id.trim().is_empty()
    }

    fn reload_cards(&mut self) {
        let set_id = self.settings.set_id.trim().to_string();
        if set_id.is_empty() {
            self.study.clear();
            return;
        }

        self.pending_load = true;
        self.task_manager.load_cards(self.api.clone(), set_id, self.settings.view);
    }

    fn save_settings(&mut self) {
        if let Err(e) = save_json(&self.settings, SETTINGS_FILE) {
            eprintln!("Failed to save settings: {}", e);
            self.modals.error.show_error("Settings", format!("Failed to save settings: {}", e));
        }
    }

    fn update_api_status(&mut self) {
        let now = Instant::now();
        let due = match self.last_api_check {
            None => true,
            Some(prev) => now.duration_since(prev) >= API_CHECK_INTERVAL,
        };

        if due {
            self.last_api_check = Some(now);
            self.task_manager.check_api_status(self.api.clone());
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::CardsLoaded(Ok(cards)) => {
                self.pending_load = false;
                println!("Loaded {} cards for set {}", cards.len(), self.settings.set_id);
                self.study.set_cards(cards);
            }
            TaskResult::CardsLoaded(Err(e)) => {
                self.pending_load = false;
                self.study.clear();
                eprintln!("Failed to load cards: {}", e);
                self.toasts.error(e);
            }

            TaskResult::CardCreated(Ok(card)) => {
                self.modals.add_card.submit_succeeded();
                self.study.add_card(card);
                self.toasts.success("Card added");
            }
            TaskResult::CardCreated(Err(e)) => {
                self.modals.add_card.submit_failed(e.clone());
                self.toasts.error(e);
            }

            TaskResult::CardDeleted { id, result: Ok(()) } => {
                self.pending_deletes = self.pending_deletes.saturating_sub(1);
                self.study.remove_card(id);
                self.toasts.success("Card deleted");
            }
            TaskResult::CardDeleted { result: Err(e), .. } => {
                self.pending_deletes = self.pending_deletes.saturating_sub(1);
                self.toasts.error(e);
            }

            TaskResult::SpeechFinished { id, result } => {
                self.speech_busy.remove(&id);
                if let Err(e) = result {
                    self.toasts.error(e);
                }
            }

            TaskResult::ApiStatus(online) => {
                self.api_online = online;
            }
        }
    }

    fn handle_top_bar_action(&mut self, action: TopBarAction) {
        match action {
            TopBarAction::Reload => {
                self.settings.set_id = self.set_id_input.trim().to_string();
                self.save_settings();
                self.reload_cards();
            }
            TopBarAction::AddCard => {
                self.modals.add_card.open_modal();
            }
            TopBarAction::OpenSettings => {
                self.modals.settings.open_settings(self.settings.clone());
            }
            TopBarAction::SetMode(mode) => {
                self.study.set_mode(mode);
            }
            TopBarAction::SetView(view) => {
                self.settings.view = view;
                self.save_settings();
                self.reload_cards();
            }
        }
    }

    fn handle_card_action(&mut self, action: CardAction) {
        match action {
            CardAction::Pronounce { id, word } => {
                // One utterance per card at a time.
                if self.speech_busy.insert(id) {
                    self.task_manager.speak(self.speech.clone(), id, word);
                }
            }
            CardAction::Delete(id) => {
                let word = self
                    .study
                    .cards
                    .iter()
                    .find(|card| card.id == Some(id))
                    .map(|card| card.word.clone())
                    .unwrap_or_default();
                self.modals.confirm_delete.request(id, word);
            }
        }
    }

    fn has_pending_work(&self) -> bool {
        self.pending_load
            || self.pending_deletes > 0
            || self.modals.add_card.is_pending()
            || !self.speech_busy.is_empty()
    }
}

impl eframe::App for CardboxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        self.update_api_status();

        let can_edit = self.can_edit() && !self.modals.add_card.is_pending();
        if let Some(action) = TopBar::show(
            ctx,
            &mut self.set_id_input,
            self.settings.view,
            self.study.mode,
            can_edit,
            self.api_online,
            self.pending_load,
        ) {
            self.handle_top_bar_action(action);
        }

        let mut card_action = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.settings.set_id.trim().is_empty() {
                ui.centered_and_justified(|ui| {
                    ui.label(self.theme.muted(
                        ui.ctx(),
                        "Enter a set id in the top bar to load its cards.",
                    ));
                });
                return;
            }

            let can_delete = self.settings.view.is_editable();

            card_action = match self.study.mode {
                StudyMode::Browse => {
                    browse_view(ui, &self.theme, &self.study, &self.speech_busy, can_delete)
                }
                StudyMode::Random => {
                    random_view(ui, &self.theme, &mut self.study, &self.speech_busy, can_delete)
                }
                StudyMode::Quiz => {
                    quiz_view(ui, &self.theme, &mut self.study);
                    None
                }
            };
        });

        if let Some(action) = card_action {
            self.handle_card_action(action);
        }

        if let Some(draft) = self.modals.add_card.show(ctx) {
            self.task_manager.create_card(
                self.api.clone(),
                self.settings.set_id.trim().to_string(),
                draft,
            );
        }

        if let Some(id) = self.modals.confirm_delete.show(ctx) {
            self.pending_deletes += 1;
            self.task_manager.delete_card(self.api.clone(), id);
        }

        if let Some(settings) = self.modals.settings.show(ctx) {
            self.settings.base_url = settings.base_url;
            self.save_settings();
            self.api = ApiClient::new(&self.settings.base_url);
            self.last_api_check = None;
            self.reload_cards();
        }

        self.modals.error.show(ctx);
        self.toasts.show(ctx, &self.theme);

        if self.has_pending_work() {
            ctx.request_repaint_after(Duration::from_millis(150));
        }
    }
}
