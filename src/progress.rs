//! Progreso entre lecciones: bloqueada → disponible → completada.
//!
//! El estado se guarda como un único documento JSON
//! `{ "completedLessons": [...] }` en un almacén clave-valor (en web es
//! `localStorage` vía `eframe::Storage`). Cada operación carga el estado,
//! lo usa y, si cambia, lo vuelve a guardar.

use crate::model::LessonOrder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("progress document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProgressState {
    pub completed_lessons: Vec<String>,
}

impl ProgressState {
    /// Estado de primera ejecución (y tras un reinicio): solo la primera lección.
    pub fn initial(order: &LessonOrder) -> Self {
        Self {
            completed_lessons: order.first().map(String::from).into_iter().collect(),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, ProgressError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, ProgressError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.completed_lessons.iter().any(|l| l == id)
    }

    /// Añade sin duplicar. Devuelve si hubo cambio.
    pub fn insert(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.completed_lessons.push(id.to_string());
        true
    }

    /// Quita ids ajenos al orden y repetidos.
    fn sanitize(mut self, order: &LessonOrder) -> Self {
        let mut seen = Vec::with_capacity(self.completed_lessons.len());
        self.completed_lessons.retain(|id| {
            if !order.contains(id) || seen.contains(id) {
                log::warn!("dropping unexpected lesson id {id:?} from stored progress");
                return false;
            }
            seen.push(id.clone());
            true
        });
        self
    }
}

/// Almacén de la entrada persistida.
pub trait ProgressStore {
    fn load(&self) -> Option<String>;
    fn store(&mut self, json: String);
    fn clear(&mut self);
}

/// Copia en memoria de la entrada; la app la vuelca a `eframe::Storage`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entry: Option<String>,
}

impl MemoryStore {
    pub fn with_entry(entry: Option<String>) -> Self {
        Self { entry }
    }

    pub fn entry(&self) -> Option<&str> {
        self.entry.as_deref()
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.entry.clone()
    }

    fn store(&mut self, json: String) {
        self.entry = Some(json);
    }

    fn clear(&mut self) {
        self.entry = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonStatus {
    Locked,
    Available,
    Completed,
}

/// Evento de un solo uso: la lección acaba de completarse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonCompleted {
    pub lesson: String,
    pub next_unlocked: Option<String>,
    pub percentage: u32,
}

/// Respuesta a "¿hay que avisar de que está bloqueada?"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockedNotice {
    pub lesson: String,
    pub prerequisite: Option<String>,
}

pub struct LessonTracker<S: ProgressStore> {
    order: LessonOrder,
    store: S,
}

impl<S: ProgressStore> LessonTracker<S> {
    pub fn new(order: LessonOrder, store: S) -> Self {
        Self { order, store }
    }

    pub fn order(&self) -> &LessonOrder {
        &self.order
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Carga el estado; ausente o corrupto equivale al estado inicial.
    pub fn state(&self) -> ProgressState {
        let Some(raw) = self.store.load() else {
            return ProgressState::initial(&self.order);
        };
        match ProgressState::from_json(&raw) {
            Ok(state) => state.sanitize(&self.order),
            Err(err) => {
                log::warn!("stored progress unreadable, starting fresh: {err}");
                ProgressState::initial(&self.order)
            }
        }
    }

    fn save(&mut self, state: &ProgressState) {
        match state.to_json() {
            Ok(json) => {
                log::debug!("saving progress: {json}");
                self.store.store(json);
            }
            Err(err) => log::warn!("could not serialize progress: {err}"),
        }
    }

    pub fn is_completed(&self, lesson_id: &str) -> bool {
        self.state().contains(lesson_id)
    }

    /// Primera lección, o la anterior ya completada. Desconocida: `false`.
    pub fn is_unlocked(&self, lesson_id: &str) -> bool {
        unlocked_in(&self.order, &self.state(), lesson_id)
    }

    pub fn status(&self, lesson_id: &str) -> LessonStatus {
        let state = self.state();
        if state.contains(lesson_id) && self.order.contains(lesson_id) {
            LessonStatus::Completed
        } else if unlocked_in(&self.order, &state, lesson_id) {
            LessonStatus::Available
        } else {
            LessonStatus::Locked
        }
    }

    /// Marca la lección como completada. Solo devuelve el evento si hubo
    /// cambio, así el aviso se dispara una única vez. Una lección bloqueada
    /// no puede saltar a completada.
    pub fn complete_lesson(&mut self, lesson_id: &str) -> Option<LessonCompleted> {
        if !self.order.contains(lesson_id) {
            log::warn!("complete requested for unknown lesson {lesson_id:?}");
            return None;
        }
        let mut state = self.state();
        if !unlocked_in(&self.order, &state, lesson_id) {
            log::warn!("complete requested for locked lesson {lesson_id:?}");
            return None;
        }
        if !state.insert(lesson_id) {
            return None;
        }
        self.save(&state);

        let percentage = percentage_of(&self.order, &state);
        let next_unlocked = self.order.successor(lesson_id).map(String::from);
        log::info!("lesson {lesson_id} completed ({percentage}%)");
        Some(LessonCompleted {
            lesson: lesson_id.to_string(),
            next_unlocked,
            percentage,
        })
    }

    pub fn completion_percentage(&self) -> u32 {
        percentage_of(&self.order, &self.state())
    }

    /// Borra la entrada; la próxima carga vuelve al estado inicial.
    pub fn reset_all(&mut self) {
        log::info!("progress reset");
        self.store.clear();
    }

    pub fn locked_notice(&self, lesson_id: &str) -> Option<LockedNotice> {
        if self.is_unlocked(lesson_id) {
            return None;
        }
        Some(LockedNotice {
            lesson: lesson_id.to_string(),
            prerequisite: self.order.predecessor(lesson_id).map(String::from),
        })
    }

    /// Primera lección desbloqueada y sin completar ("continuar").
    pub fn next_lesson(&self) -> Option<&str> {
        let state = self.state();
        self.order
            .iter()
            .find(|id| !state.contains(id) && unlocked_in(&self.order, &state, id))
    }
}

fn unlocked_in(order: &LessonOrder, state: &ProgressState, lesson_id: &str) -> bool {
    match order.position(lesson_id) {
        Some(0) => true,
        Some(_) => order
            .predecessor(lesson_id)
            .map(|prev| state.contains(prev))
            .unwrap_or(false),
        None => false,
    }
}

fn percentage_of(order: &LessonOrder, state: &ProgressState) -> u32 {
    if order.is_empty() {
        return 0;
    }
    let done = state.completed_lessons.len() as f64;
    (100.0 * done / order.len() as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> LessonTracker<MemoryStore> {
        LessonTracker::new(LessonOrder::new(["a", "b", "c"]), MemoryStore::default())
    }

    #[test]
    fn first_run_completes_only_the_first_lesson() {
        let t = tracker();
        assert_eq!(t.state().completed_lessons, vec!["a".to_string()]);
        assert_eq!(t.status("a"), LessonStatus::Completed);
        assert_eq!(t.status("b"), LessonStatus::Available);
        assert_eq!(t.status("c"), LessonStatus::Locked);
    }

    #[test]
    fn unlock_follows_predecessor() {
        let t = tracker();
        assert!(t.is_unlocked("a"));
        assert!(t.is_unlocked("b"));
        assert!(!t.is_unlocked("c"));
        assert!(!t.is_unlocked("zzz"));
    }

    #[test]
    fn completing_b_reaches_sixty_seven_percent() {
        let mut t = tracker();
        let event = t.complete_lesson("b").expect("first completion");
        assert_eq!(event.next_unlocked.as_deref(), Some("c"));
        assert_eq!(event.percentage, 67);
        assert_eq!(t.state().completed_lessons, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(t.completion_percentage(), 67);
        assert!(t.is_unlocked("c"));
    }

    #[test]
    fn completion_is_idempotent() {
        let mut t = tracker();
        assert!(t.complete_lesson("b").is_some());
        let size = t.state().completed_lessons.len();
        assert!(t.complete_lesson("b").is_none());
        assert_eq!(t.state().completed_lessons.len(), size);
    }

    #[test]
    fn unknown_lesson_is_not_recorded() {
        let mut t = tracker();
        assert!(t.complete_lesson("zzz").is_none());
        assert_eq!(t.store().entry(), None);
        assert_eq!(t.status("zzz"), LessonStatus::Locked);
    }

    #[test]
    fn locked_lesson_cannot_be_completed() {
        let mut t = tracker();
        assert!(t.complete_lesson("c").is_none());
        assert_eq!(t.status("c"), LessonStatus::Locked);
        assert_eq!(t.store().entry(), None);

        t.complete_lesson("b");
        assert_eq!(t.status("c"), LessonStatus::Available);
        assert!(t.complete_lesson("c").is_some());
        assert_eq!(t.status("c"), LessonStatus::Completed);
    }

    #[test]
    fn unlock_is_monotonic() {
        let mut t = tracker();
        let mut seen: Vec<&str> = Vec::new();
        for id in ["b", "c", "b", "a"] {
            t.complete_lesson(id);
            for l in ["a", "b", "c"] {
                if t.is_unlocked(l) && !seen.contains(&l) {
                    seen.push(l);
                }
            }
            for l in &seen {
                assert!(t.is_unlocked(l), "{l} se volvió a bloquear");
            }
        }
    }

    #[test]
    fn state_round_trips_through_store() {
        let mut t = tracker();
        t.complete_lesson("b");
        let raw = t.store().entry().expect("saved").to_string();
        assert_eq!(raw, r#"{"completedLessons":["a","b"]}"#);

        let reloaded = LessonTracker::new(
            LessonOrder::new(["a", "b", "c"]),
            MemoryStore::with_entry(Some(raw)),
        );
        assert_eq!(reloaded.state(), t.state());
    }

    #[test]
    fn malformed_state_falls_back_to_default() {
        let t = LessonTracker::new(
            LessonOrder::new(["a", "b", "c"]),
            MemoryStore::with_entry(Some("{not json".into())),
        );
        assert_eq!(t.state(), ProgressState::initial(t.order()));
    }

    #[test]
    fn foreign_and_repeated_ids_are_dropped_on_load() {
        let t = LessonTracker::new(
            LessonOrder::new(["a", "b", "c"]),
            MemoryStore::with_entry(Some(r#"{"completedLessons":["a","x","b","a"]}"#.into())),
        );
        assert_eq!(t.state().completed_lessons, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn reset_matches_first_run() {
        let mut t = tracker();
        t.complete_lesson("b");
        t.complete_lesson("c");
        t.reset_all();
        assert_eq!(t.store().entry(), None);
        assert_eq!(t.state(), tracker().state());
        assert_eq!(t.completion_percentage(), 33);
    }

    #[test]
    fn locked_notice_names_the_prerequisite() {
        let t = tracker();
        assert_eq!(t.locked_notice("b"), None);
        assert_eq!(
            t.locked_notice("c"),
            Some(LockedNotice {
                lesson: "c".into(),
                prerequisite: Some("b".into())
            })
        );
    }

    #[test]
    fn next_lesson_is_first_open_one() {
        let mut t = tracker();
        assert_eq!(t.next_lesson(), Some("b"));
        t.complete_lesson("b");
        t.complete_lesson("c");
        assert_eq!(t.next_lesson(), None);
    }
}
