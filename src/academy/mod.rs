//! Study academy
//!
//! A small screen machine layered under `RunStatus::Academy`. It owns the
//! subject/class selection, the in-flight fetch flag, the parsed paper and
//! its reading state (page, zoom, enlarged), and the exam countdown. The
//! fetch itself happens in the driver; this module only hands out the
//! prompt and accepts the result.

pub mod gemini;
pub mod paper;
pub mod timer;

pub use gemini::{AcademyError, GeminiConfig};
pub use paper::{BoardPaper, Grade, Subject, build_prompt};
pub use timer::ExamTimer;

pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 2.0;
pub const SCALE_STEP: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AcademyView {
    #[default]
    Home,
    Boards,
    BoardContent,
    BoardSolved,
}

/// What the driver needs to issue a paper request
#[derive(Debug, Clone, PartialEq)]
pub struct PaperRequest {
    pub subject: Subject,
    pub grade: Grade,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AcademySession {
    pub view: AcademyView,
    pub subject: Option<Subject>,
    pub grade: Option<Grade>,
    pub loading: bool,
    pub paper: Option<BoardPaper>,
    pub page: usize,
    pub scale: f32,
    pub enlarged: bool,
    pub timer: ExamTimer,
}

impl Default for AcademySession {
    fn default() -> Self {
        Self {
            view: AcademyView::Home,
            subject: None,
            grade: None,
            loading: false,
            paper: None,
            page: 0,
            scale: 1.0,
            enlarged: false,
            timer: ExamTimer::default(),
        }
    }
}

impl AcademySession {
    /// Entering the academy always lands on its home screen
    pub fn enter(&mut self) {
        self.view = AcademyView::Home;
    }

    pub fn open_boards(&mut self) -> bool {
        self.transition(AcademyView::Home, AcademyView::Boards)
    }

    /// Boards back to the academy home
    pub fn back_home(&mut self) -> bool {
        self.transition(AcademyView::Boards, AcademyView::Home)
    }

    pub fn select_subject(&mut self, subject: Subject) -> bool {
        if self.view != AcademyView::Boards {
            return false;
        }
        self.subject = Some(subject);
        true
    }

    pub fn select_grade(&mut self, grade: Grade) -> bool {
        if self.view != AcademyView::Boards {
            return false;
        }
        self.grade = Some(grade);
        true
    }

    pub fn can_generate(&self) -> bool {
        self.view == AcademyView::Boards
            && self.subject.is_some()
            && self.grade.is_some()
            && !self.loading
    }

    /// Mark a fetch as in flight and return what to send
    pub fn begin_fetch(&mut self) -> Option<PaperRequest> {
        if !self.can_generate() {
            return None;
        }
        let (subject, grade) = (self.subject?, self.grade?);
        self.loading = true;
        log::info!("Requesting {} class {} board paper", subject, grade.number());
        Some(PaperRequest {
            subject,
            grade,
            prompt: build_prompt(subject, grade),
        })
    }

    /// Accept the fetch outcome. Failures are logged and only clear the
    /// loading flag.
    pub fn finish_fetch(&mut self, request: &PaperRequest, result: Result<String, AcademyError>) {
        self.loading = false;
        match result {
            Ok(text) => {
                let paper = BoardPaper::parse(request.subject, request.grade, &text);
                log::info!("Loaded '{}' ({} pages)", paper.title, paper.page_count());
                self.paper = Some(paper);
                self.page = 0;
                self.view = AcademyView::BoardContent;
                self.timer.restart();
            }
            Err(e) => log::error!("Board paper request failed: {}", e),
        }
    }

    pub fn current_page(&self) -> Option<&str> {
        self.paper
            .as_ref()
            .and_then(|p| p.pages.get(self.page))
            .map(String::as_str)
    }

    pub fn page_count(&self) -> usize {
        self.paper.as_ref().map_or(0, BoardPaper::page_count)
    }

    pub fn has_next_page(&self) -> bool {
        self.page + 1 < self.page_count()
    }

    pub fn has_prev_page(&self) -> bool {
        self.page > 0
    }

    pub fn next_page(&mut self) -> bool {
        if !self.has_next_page() {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn prev_page(&mut self) -> bool {
        if !self.has_prev_page() {
            return false;
        }
        self.page -= 1;
        true
    }

    pub fn zoom_in(&mut self) {
        self.scale = (self.scale + SCALE_STEP).min(MAX_SCALE);
    }

    pub fn zoom_out(&mut self) {
        self.scale = (self.scale - SCALE_STEP).max(MIN_SCALE);
    }

    pub fn toggle_enlarged(&mut self) {
        self.enlarged = !self.enlarged;
    }

    pub fn show_solution(&mut self) -> bool {
        self.transition(AcademyView::BoardContent, AcademyView::BoardSolved)
    }

    pub fn back_to_exam(&mut self) -> bool {
        self.transition(AcademyView::BoardSolved, AcademyView::BoardContent)
    }

    /// Leave the answer key for the academy home and stop the clock
    pub fn exit_exam(&mut self) -> bool {
        if !self.transition(AcademyView::BoardSolved, AcademyView::Home) {
            return false;
        }
        self.timer.stop();
        true
    }

    pub fn toggle_timer(&mut self) {
        self.timer.toggle();
    }

    /// Per-frame update; the clock keeps running in every view
    pub fn advance(&mut self, now_ms: f64) {
        self.timer.advance(now_ms);
    }

    fn transition(&mut self, from: AcademyView, to: AcademyView) -> bool {
        if self.view != from {
            log::debug!("Ignoring academy move {:?} -> {:?} from {:?}", from, to, self.view);
            return false;
        }
        self.view = to;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPLY: &str = "one --- PAGE BREAK --- two --- PAGE BREAK --- three --- SOLUTION START --- key";

    fn ready_session() -> AcademySession {
        let mut s = AcademySession::default();
        assert!(s.open_boards());
        s.select_subject(Subject::Chemistry);
        s.select_grade(Grade::Twelfth);
        s
    }

    fn loaded_session() -> AcademySession {
        let mut s = ready_session();
        let req = s.begin_fetch().unwrap();
        s.finish_fetch(&req, Ok(REPLY.to_string()));
        s
    }

    #[test]
    fn generate_needs_subject_and_grade() {
        let mut s = AcademySession::default();
        assert!(!s.select_subject(Subject::Physics));
        s.open_boards();
        assert!(!s.can_generate());
        s.select_subject(Subject::Physics);
        assert!(s.begin_fetch().is_none());
        s.select_grade(Grade::Tenth);
        assert!(s.can_generate());
    }

    #[test]
    fn one_fetch_at_a_time() {
        let mut s = ready_session();
        let req = s.begin_fetch().unwrap();
        assert!(s.loading);
        assert!(req.prompt.contains("Class 12"));
        assert!(s.begin_fetch().is_none());
    }

    #[test]
    fn success_opens_first_page_and_starts_clock() {
        let s = loaded_session();
        assert!(!s.loading);
        assert_eq!(s.view, AcademyView::BoardContent);
        assert_eq!(s.page, 0);
        assert_eq!(s.page_count(), 3);
        assert_eq!(s.current_page(), Some("one"));
        assert!(s.timer.is_running());
        assert_eq!(s.timer.remaining(), timer::EXAM_SECONDS);
        assert_eq!(
            s.paper.as_ref().map(|p| p.title.as_str()),
            Some("Chemistry - Class 12 Board Mock")
        );
    }

    #[test]
    fn failure_only_clears_loading() {
        let mut s = ready_session();
        let req = s.begin_fetch().unwrap();
        s.finish_fetch(&req, Err(AcademyError::Status(500)));
        assert!(!s.loading);
        assert_eq!(s.view, AcademyView::Boards);
        assert!(s.paper.is_none());
        assert!(!s.timer.is_running());
        assert!(s.can_generate());
    }

    #[test]
    fn paging_is_clamped() {
        let mut s = loaded_session();
        assert!(!s.prev_page());
        assert!(s.next_page());
        assert!(s.next_page());
        assert!(!s.next_page());
        assert_eq!(s.current_page(), Some("three"));
        assert!(s.prev_page());
        assert_eq!(s.page, 1);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut s = AcademySession::default();
        for _ in 0..30 {
            s.zoom_in();
        }
        assert_eq!(s.scale, MAX_SCALE);
        for _ in 0..30 {
            s.zoom_out();
        }
        assert_eq!(s.scale, MIN_SCALE);
    }

    #[test]
    fn solution_round_trip_and_exit() {
        let mut s = loaded_session();
        assert!(!s.exit_exam());
        assert!(s.show_solution());
        assert!(s.back_to_exam());
        assert!(s.show_solution());
        assert!(s.exit_exam());
        assert_eq!(s.view, AcademyView::Home);
        assert!(!s.timer.is_running());
    }

    #[test]
    fn enter_resets_view_only() {
        let mut s = loaded_session();
        s.toggle_enlarged();
        s.enter();
        assert_eq!(s.view, AcademyView::Home);
        assert!(s.enlarged);
        assert!(s.paper.is_some());
    }
}
