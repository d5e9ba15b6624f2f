use crate::model::PracticeInventory;
use std::collections::BTreeSet;

/// Algo que el alumno acaba de terminar en la página actual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PracticeEvent {
    Drag(String),
    Coding(String),
    QuizSubmitted,
}

/// Estado de práctica de una carga de página. Nunca se persiste: se crea al
/// abrir la lección y se descarta al salir.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PracticeSession {
    pub drag_completed: BTreeSet<String>,
    pub coding_completed: BTreeSet<String>,
    pub quiz_submitted: bool,
}

impl PracticeSession {
    /// Registra el evento; devuelve si cambió algo.
    pub fn record(&mut self, event: PracticeEvent) -> bool {
        match event {
            PracticeEvent::Drag(id) => self.drag_completed.insert(id),
            PracticeEvent::Coding(id) => self.coding_completed.insert(id),
            PracticeEvent::QuizSubmitted => !std::mem::replace(&mut self.quiz_submitted, true),
        }
    }

    /// Reintentar el quiz: vuelve a quedar sin enviar.
    pub fn reopen_quiz(&mut self) {
        self.quiz_submitted = false;
    }

    pub fn drag_done(&self, inventory: &PracticeInventory) -> bool {
        inventory.drag_total == 0 || self.drag_completed.len() >= inventory.drag_total
    }

    pub fn coding_done(&self, inventory: &PracticeInventory) -> bool {
        inventory.coding_total == 0 || self.coding_completed.len() >= inventory.coding_total
    }

    pub fn quiz_done(&self, inventory: &PracticeInventory) -> bool {
        !inventory.has_quiz || self.quiz_submitted
    }

    /// ¿Puede completarse la lección automáticamente?
    pub fn all_complete(&self, inventory: &PracticeInventory) -> bool {
        self.drag_done(inventory) && self.coding_done(inventory) && self.quiz_done(inventory)
    }
}
