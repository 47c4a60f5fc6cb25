//! Stellar Evo entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, KeyboardEvent, MouseEvent, PointerEvent};

    use stellar_evo::academy::{AcademyView, GeminiConfig, Grade, Subject, gemini};
    use stellar_evo::audio::{AudioManager, SoundEffect};
    use stellar_evo::garage::{self, SHIP_DESIGNS};
    use stellar_evo::highscores::format_age;
    use stellar_evo::persistence::{KeyValueStore, LocalStore, MemoryStore};
    use stellar_evo::platform::{epoch_ms, now_ms};
    use stellar_evo::renderer::{RenderError, RenderState, scene};
    use stellar_evo::sim::{GameEvent, GameState, RunStatus, TickInput, tick};
    use stellar_evo::ui::{self, Action};
    use stellar_evo::{AcademySession, HighScores, Profile, Tuning};

    #[derive(Debug, thiserror::Error)]
    enum GpuInitError {
        #[error("failed to create surface: {0}")]
        Surface(#[from] wgpu::CreateSurfaceError),

        #[error("no suitable adapter: {0}")]
        Adapter(#[from] wgpu::RequestAdapterError),

        #[error(transparent)]
        Render(#[from] RenderError),
    }

    /// Result of the run that just ended, for the game-over overlay
    #[derive(Default)]
    struct RunSummary {
        new_best: bool,
        rank: Option<usize>,
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        academy: AcademySession,
        profile: Profile,
        high_scores: HighScores,
        store: Box<dyn KeyValueStore>,
        gemini: GeminiConfig,
        render_state: Option<RenderState>,
        audio: AudioManager,
        input: TickInput,
        last_run: RunSummary,
        /// Status shown last frame; lists are rebuilt when it changes
        shown_status: Option<RunStatus>,
    }

    impl Game {
        fn new(seed: u64, width: f32, height: f32) -> Self {
            let store: Box<dyn KeyValueStore> = match LocalStore::open() {
                Ok(store) => Box::new(store),
                Err(e) => {
                    log::warn!("{} - progress will not be saved", e);
                    Box::new(MemoryStore::default())
                }
            };
            let tuning = Tuning::load(store.as_ref());
            let profile = Profile::load(store.as_ref());
            let high_scores = HighScores::load(store.as_ref());

            let mut audio = AudioManager::new();
            audio.set_muted(!profile.voice_enabled);

            Self {
                state: GameState::new(seed, tuning, width, height),
                academy: AcademySession::default(),
                profile,
                high_scores,
                store,
                gemini: GeminiConfig::default(),
                render_state: None,
                audio,
                input: TickInput::default(),
                last_run: RunSummary::default(),
                shown_status: None,
            }
        }

        /// One frame: simulate, then draw. Without a surface both are skipped.
        fn frame(&mut self, time: f64) {
            self.academy.advance(time);

            if self.render_state.is_some() {
                tick(&mut self.state, &self.input, time);
                self.input.flap = false;

                for event in self.state.drain_events() {
                    self.handle_event(event);
                }
                self.render();
            }

            self.update_hud();
        }

        fn handle_event(&mut self, event: GameEvent) {
            self.audio.play(SoundEffect::for_event(&event));
            if let GameEvent::Crashed { .. } = event {
                self.finish_run();
            }
        }

        /// Credit the run and persist the results
        fn finish_run(&mut self) {
            let score = self.state.score;
            let new_best = self.profile.record_run(score);
            let rank = self
                .high_scores
                .add_score(score, self.profile.selected_ship, epoch_ms());
            self.last_run = RunSummary { new_best, rank };

            if new_best {
                self.audio.play(SoundEffect::HighScore);
            }
            self.save_profile();
            if rank.is_some() {
                if let Err(e) = self.high_scores.save(self.store.as_mut()) {
                    log::warn!("Failed to save high scores: {}", e);
                }
            }
        }

        fn save_profile(&mut self) {
            if let Err(e) = self.profile.save(self.store.as_mut()) {
                log::warn!("Failed to save profile: {}", e);
            }
        }

        fn flap(&mut self) {
            if self.state.is_playing() {
                self.input.flap = true;
            }
        }

        fn act(&mut self, action: Action) {
            if ui::apply(&mut self.state, &mut self.academy, action, now_ms())
                && matches!(action, Action::Launch | Action::Relaunch)
            {
                self.last_run = RunSummary::default();
                self.input = TickInput::default();
            }
        }

        fn toggle_voice(&mut self) {
            let enabled = self.profile.toggle_voice();
            self.audio.set_muted(!enabled);
            self.save_profile();
            log::info!("Voice {}", if enabled { "enabled" } else { "disabled" });
        }

        fn choose_ship(&mut self, id: u32) {
            let result = if self.profile.owns(id) {
                garage::select(&mut self.profile, id)
            } else {
                garage::purchase(&mut self.profile, id)
            };

            let message = match result {
                Ok(()) => {
                    self.save_profile();
                    String::new()
                }
                Err(e) => {
                    log::info!("Garage: {}", e);
                    e.to_string()
                }
            };
            if let Some(doc) = document() {
                set_text(&doc, "garage-message", &message);
                fill_garage(&doc, &self.profile);
            }
        }

        fn resize(&mut self, size: (u32, u32), logical: (f32, f32)) {
            self.state.resize(logical.0, logical.1);
            if let Some(render_state) = &mut self.render_state {
                render_state.resize(size, logical);
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let Some(render_state) = &mut self.render_state else {
                return;
            };
            let design = garage::selected_design(&self.profile);
            let vertices = scene(&self.state, design);

            match render_state.render(&vertices) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => render_state.reconfigure(),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        /// Update HUD and overlays in the DOM
        fn update_hud(&mut self) {
            let Some(doc) = document() else { return };
            let status = self.state.status;

            if self.shown_status != Some(status) {
                match status {
                    RunStatus::Garage => {
                        set_text(&doc, "garage-message", "");
                        fill_garage(&doc, &self.profile);
                    }
                    RunStatus::Leaderboard => fill_leaderboard(&doc, &self.high_scores),
                    _ => {}
                }
                self.shown_status = Some(status);
            }

            set_hidden(&doc, "hud", status != RunStatus::Playing);
            set_hidden(&doc, "splash", status != RunStatus::Splash);
            set_hidden(&doc, "ready", status != RunStatus::Ready);
            set_hidden(&doc, "game-over", status != RunStatus::GameOver);
            set_hidden(&doc, "garage", status != RunStatus::Garage);
            set_hidden(&doc, "leaderboard", status != RunStatus::Leaderboard);
            set_hidden(&doc, "academy", status != RunStatus::Academy);

            match status {
                RunStatus::Playing => {
                    set_text(&doc, "hud-score", &self.state.score.to_string());
                    set_text(
                        &doc,
                        "hud-velocity",
                        &format!("{:.0}", self.state.ship.velocity.abs() * 100.0),
                    );
                    set_text(&doc, "hud-best", &self.profile.best_score.to_string());
                }
                RunStatus::Splash => {
                    set_text(&doc, "splash-best", &self.profile.best_score.to_string());
                    set_text(&doc, "splash-coins", &self.profile.coins.to_string());
                    set_text(
                        &doc,
                        "voice-btn",
                        if self.profile.voice_enabled { "Voice: On" } else { "Voice: Off" },
                    );
                }
                RunStatus::GameOver => {
                    set_text(&doc, "final-score", &self.state.score.to_string());
                    set_text(&doc, "final-best", &self.profile.best_score.to_string());
                    let rank = match self.last_run {
                        RunSummary { new_best: true, .. } => "New best!".to_string(),
                        RunSummary { rank: Some(rank), .. } => {
                            format!("#{} on the leaderboard", rank)
                        }
                        _ => String::new(),
                    };
                    set_text(&doc, "final-rank", &rank);
                }
                RunStatus::Garage => {
                    set_text(&doc, "garage-coins", &self.profile.coins.to_string());
                }
                RunStatus::Academy => self.update_academy(&doc),
                RunStatus::Ready | RunStatus::Leaderboard => {}
            }
        }

        fn update_academy(&self, doc: &Document) {
            let a = &self.academy;
            set_hidden(doc, "academy-home", a.view != AcademyView::Home);
            set_hidden(doc, "academy-boards", a.view != AcademyView::Boards);
            set_hidden(doc, "academy-content", a.view != AcademyView::BoardContent);
            set_hidden(doc, "academy-solved", a.view != AcademyView::BoardSolved);

            match a.view {
                AcademyView::Home => {}
                AcademyView::Boards => {
                    for (i, subject) in Subject::ALL.iter().enumerate() {
                        let selector = format!("[data-subject=\"{}\"]", i);
                        toggle_class(doc, &selector, "selected", a.subject == Some(*subject));
                    }
                    for grade in [Grade::Tenth, Grade::Twelfth] {
                        let selector = format!("[data-grade=\"{}\"]", grade.number());
                        toggle_class(doc, &selector, "selected", a.grade == Some(grade));
                    }
                    set_disabled(doc, "generate-btn", !a.can_generate());
                    set_hidden(doc, "academy-loading", !a.loading);
                }
                AcademyView::BoardContent => {
                    if let Some(paper) = &a.paper {
                        set_text(doc, "paper-title", &paper.title);
                    }
                    set_text(doc, "paper-page", a.current_page().unwrap_or_default());
                    set_text(
                        doc,
                        "page-indicator",
                        &format!("{} / {}", a.page + 1, a.page_count()),
                    );
                    set_disabled(doc, "prev-page-btn", !a.has_prev_page());
                    set_disabled(doc, "next-page-btn", !a.has_next_page());
                    set_text(doc, "paper-zoom", &format!("{:.0}%", a.scale * 100.0));
                    set_text(doc, "exam-timer", &a.timer.display());
                    toggle_class(doc, "#exam-timer", "low", a.timer.is_low());
                    set_text(
                        doc,
                        "timer-toggle-btn",
                        if a.timer.is_running() { "Pause" } else { "Resume" },
                    );
                    toggle_class(doc, "#paper", "enlarged", a.enlarged);
                    if let Some(paper) = doc.get_element_by_id("paper") {
                        let _ = paper.set_attribute("style", &format!("transform: scale({:.1})", a.scale));
                    }
                }
                AcademyView::BoardSolved => {
                    if let Some(paper) = &a.paper {
                        set_text(doc, "solution-text", &paper.solution);
                    }
                }
            }
        }
    }

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn set_text(doc: &Document, id: &str, text: &str) {
        if let Some(el) = doc.get_element_by_id(id) {
            if el.text_content().as_deref() != Some(text) {
                el.set_text_content(Some(text));
            }
        }
    }

    fn set_hidden(doc: &Document, id: &str, hidden: bool) {
        if let Some(el) = doc.get_element_by_id(id) {
            let _ = el.class_list().toggle_with_force("hidden", hidden);
        }
    }

    fn toggle_class(doc: &Document, selector: &str, class: &str, on: bool) {
        if let Some(el) = doc.query_selector(selector).ok().flatten() {
            let _ = el.class_list().toggle_with_force(class, on);
        }
    }

    fn set_disabled(doc: &Document, id: &str, disabled: bool) {
        if let Some(el) = doc.get_element_by_id(id) {
            let _ = if disabled {
                el.set_attribute("disabled", "")
            } else {
                el.remove_attribute("disabled")
            };
        }
    }

    fn fill_garage(doc: &Document, profile: &Profile) {
        let Some(list) = doc.get_element_by_id("garage-list") else {
            return;
        };
        let html: String = SHIP_DESIGNS
            .iter()
            .map(|ship| {
                let label = if profile.selected_ship == ship.id {
                    "Flying".to_string()
                } else if profile.owns(ship.id) {
                    "Select".to_string()
                } else {
                    format!("Buy {}", ship.price)
                };
                format!(
                    "<div class=\"ship-card\"><div><strong style=\"color:#{:06x}\">{}</strong><br><small>{}</small></div><button data-ship=\"{}\">{}</button></div>",
                    ship.primary_color,
                    ship.name,
                    ship.features.join(" / "),
                    ship.id,
                    label
                )
            })
            .collect();
        list.set_inner_html(&html);
    }

    fn fill_leaderboard(doc: &Document, scores: &HighScores) {
        let Some(list) = doc.get_element_by_id("leaderboard-list") else {
            return;
        };
        if scores.is_empty() {
            list.set_inner_html("<li>No runs yet</li>");
            return;
        }
        let now = epoch_ms();
        let html: String = scores
            .entries
            .iter()
            .map(|entry| {
                let ship = garage::design(entry.ship_id).map_or("Unknown", |d| d.name);
                format!(
                    "<li><strong>{}</strong> &middot; {} &middot; {}</li>",
                    entry.score,
                    ship,
                    format_age(now, entry.timestamp)
                )
            })
            .collect();
        list.set_inner_html(&html);
    }

    fn fill_subjects(doc: &Document) {
        let Some(list) = doc.get_element_by_id("subject-list") else {
            return;
        };
        let html: String = Subject::ALL
            .iter()
            .enumerate()
            .map(|(i, s)| format!("<button data-subject=\"{}\">{}</button>", i, s))
            .collect();
        list.set_inner_html(&html);
    }

    /// Canvas backing size in device pixels and scene size in CSS pixels
    fn viewport_size() -> ((u32, u32), (f32, f32)) {
        let Some(window) = web_sys::window() else {
            return ((1, 1), (1.0, 1.0));
        };
        let css = |v: Result<JsValue, JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0).max(1.0)
        };
        let w = css(window.inner_width());
        let h = css(window.inner_height());
        let dpr = window.device_pixel_ratio();
        (
            ((w * dpr) as u32, (h * dpr) as u32),
            (w as f32, h as f32),
        )
    }

    async fn init_gpu(
        canvas: &HtmlCanvasElement,
        size: (u32, u32),
        logical: (f32, f32),
    ) -> Result<RenderState, GpuInitError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        Ok(RenderState::new(surface, &adapter, size, logical).await?)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Stellar Evo starting...");

        let Some(doc) = document() else {
            log::error!("No document - cannot start");
            return;
        };

        if let Some(loading) = doc.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let Some(canvas) = doc
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No <canvas id=\"canvas\"> found");
            return;
        };

        let (size, logical) = viewport_size();
        canvas.set_width(size.0);
        canvas.set_height(size.1);

        let seed = epoch_ms() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, logical.0, logical.1)));
        log::info!("Game initialized with seed: {}", seed);

        fill_subjects(&doc);
        setup_input_handlers(game.clone());
        setup_menu_buttons(&doc, game.clone());
        setup_academy_buttons(&doc, game.clone());
        setup_garage(&doc, game.clone());
        setup_resize(canvas.clone(), game.clone());

        // Menus keep working without a surface; only the canvas stays blank
        match init_gpu(&canvas, size, logical).await {
            Ok(render_state) => match game.try_borrow_mut() {
                Ok(mut g) => g.render_state = Some(render_state),
                Err(_) => log::error!("Game busy while attaching renderer"),
            },
            Err(e) => log::error!("Rendering unavailable: {}", e),
        }

        request_animation_frame(game);

        log::info!("Stellar Evo running!");
    }

    /// Attach `f` to clicks on the element with `id`
    fn on_click(doc: &Document, id: &str, game: &Rc<RefCell<Game>>, mut f: impl FnMut(&mut Game) + 'static) {
        let Some(el) = doc.get_element_by_id(id) else {
            log::warn!("Missing #{}", id);
            return;
        };
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            event.stop_propagation();
            if let Ok(mut g) = game.try_borrow_mut() {
                f(&mut g);
            }
        });
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Attach `f` to clicks on children of `id` carrying `attr`
    fn on_delegated_click(
        doc: &Document,
        id: &str,
        attr: &'static str,
        game: &Rc<RefCell<Game>>,
        mut f: impl FnMut(&mut Game, &str) + 'static,
    ) {
        let Some(el) = doc.get_element_by_id(id) else {
            log::warn!("Missing #{}", id);
            return;
        };
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let value = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|t| t.closest(&format!("[{}]", attr)).ok().flatten())
                .and_then(|t| t.get_attribute(attr));
            let Some(value) = value else { return };
            if let Ok(mut g) = game.try_borrow_mut() {
                f(&mut g, &value);
            }
        });
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };

        // Pointer anywhere flaps; buttons are hidden during a run
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                if let Ok(mut g) = game.try_borrow_mut() {
                    g.flap();
                }
            });
            let _ = window
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Ok(mut g) = game.try_borrow_mut() else { return };
                match event.key().as_str() {
                    " " => {
                        if g.state.is_playing() {
                            event.prevent_default();
                        }
                        g.flap();
                    }
                    "v" | "V" => g.toggle_voice(),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_menu_buttons(doc: &Document, game: Rc<RefCell<Game>>) {
        let bindings = [
            ("start-btn", Action::StartFlight),
            ("academy-btn", Action::OpenAcademy),
            ("garage-btn", Action::OpenGarage),
            ("leaderboard-btn", Action::OpenLeaderboard),
            ("launch-btn", Action::Launch),
            ("abort-btn", Action::Abort),
            ("relaunch-btn", Action::Relaunch),
            ("gameover-home-btn", Action::ReturnHome),
            ("garage-home-btn", Action::ReturnHome),
            ("leaderboard-home-btn", Action::ReturnHome),
            ("academy-exit-btn", Action::ReturnHome),
        ];
        for (id, action) in bindings {
            on_click(doc, id, &game, move |g| g.act(action));
        }
        on_click(doc, "voice-btn", &game, Game::toggle_voice);
    }

    fn setup_academy_buttons(doc: &Document, game: Rc<RefCell<Game>>) {
        on_click(doc, "boards-btn", &game, |g| {
            g.academy.open_boards();
        });
        on_click(doc, "boards-back-btn", &game, |g| {
            g.academy.back_home();
        });
        on_click(doc, "prev-page-btn", &game, |g| {
            g.academy.prev_page();
        });
        on_click(doc, "next-page-btn", &game, |g| {
            g.academy.next_page();
        });
        on_click(doc, "zoom-in-btn", &game, |g| g.academy.zoom_in());
        on_click(doc, "zoom-out-btn", &game, |g| g.academy.zoom_out());
        on_click(doc, "enlarge-btn", &game, |g| g.academy.toggle_enlarged());
        on_click(doc, "timer-toggle-btn", &game, |g| g.academy.toggle_timer());
        on_click(doc, "solution-btn", &game, |g| {
            g.academy.show_solution();
        });
        on_click(doc, "back-to-exam-btn", &game, |g| {
            g.academy.back_to_exam();
        });
        on_click(doc, "exit-exam-btn", &game, |g| {
            g.academy.exit_exam();
        });

        on_delegated_click(doc, "subject-list", "data-subject", &game, |g, value| {
            if let Some(subject) = value.parse::<usize>().ok().and_then(|i| Subject::ALL.get(i)) {
                g.academy.select_subject(*subject);
            }
        });
        on_delegated_click(doc, "grade-list", "data-grade", &game, |g, value| {
            if let Some(grade) = value.parse::<u8>().ok().and_then(Grade::from_number) {
                g.academy.select_grade(grade);
            }
        });

        let Some(generate) = doc.get_element_by_id("generate-btn") else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            start_paper_fetch(game.clone());
        });
        let _ = generate.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn start_paper_fetch(game: Rc<RefCell<Game>>) {
        let (request, config) = {
            let Ok(mut g) = game.try_borrow_mut() else { return };
            let Some(request) = g.academy.begin_fetch() else {
                return;
            };
            (request, g.gemini.clone())
        };

        wasm_bindgen_futures::spawn_local(async move {
            let result = gemini::generate(&config, &request.prompt).await;
            match game.try_borrow_mut() {
                Ok(mut g) => g.academy.finish_fetch(&request, result),
                Err(_) => log::error!("Game busy when paper arrived; dropping it"),
            }
        });
    }

    fn setup_garage(doc: &Document, game: Rc<RefCell<Game>>) {
        on_delegated_click(doc, "garage-list", "data-ship", &game, |g, value| {
            if let Ok(id) = value.parse::<u32>() {
                g.choose_ship(id);
            }
        });
    }

    fn setup_resize(canvas: HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (size, logical) = viewport_size();
            canvas.set_width(size.0);
            canvas.set_height(size.1);
            if let Ok(mut g) = game.try_borrow_mut() {
                g.resize(size, logical);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window - frame loop stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        match game.try_borrow_mut() {
            Ok(mut g) => g.frame(time),
            Err(_) => log::debug!("Game busy, skipping frame"),
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Stellar Evo (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    autopilot_flight();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless run with a simple autopilot, logging the outcome
#[cfg(not(target_arch = "wasm32"))]
fn autopilot_flight() {
    use stellar_evo::sim::{GameEvent, GameState, TickInput, tick};
    use stellar_evo::ui::{self, Action};
    use stellar_evo::{AcademySession, Tuning};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const MAX_FRAMES: u32 = 60 * 120;

    let seed = stellar_evo::platform::epoch_ms() as u64;
    let mut state = GameState::new(seed, Tuning::default(), 480.0, 720.0);
    let mut academy = AcademySession::default();

    ui::apply(&mut state, &mut academy, Action::StartFlight, 0.0);
    ui::apply(&mut state, &mut academy, Action::Launch, 0.0);

    let mut now = 0.0;
    let mut frames = 0;
    while state.is_playing() && frames < MAX_FRAMES {
        now += FRAME_MS;
        frames += 1;

        // Aim for the middle of the next gap still ahead of the nose
        let target = state
            .pipes
            .iter()
            .find(|p| p.right() >= state.ship.x)
            .map_or(state.viewport.height / 2.0, |p| (p.top_height + p.bottom_y) / 2.0);
        let center = state.ship.y + state.ship.height / 2.0;
        let input = TickInput {
            flap: center > target + 12.0 && state.ship.velocity > 0.0,
        };

        tick(&mut state, &input, now);
        for event in state.drain_events() {
            match event {
                GameEvent::Scored { score } => log::debug!("Cleared pipe {}", score),
                GameEvent::Crashed { cause } => log::info!("Crashed: {:?}", cause),
                GameEvent::Flapped => {}
            }
        }
    }

    log::info!(
        "Autopilot flew {:.1}s and cleared {} pipes",
        now / 1000.0,
        state.score
    );
    println!("Autopilot score: {}", state.score);
}
