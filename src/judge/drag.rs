use crate::model::DragChallenge;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// Todos los huecos llenos y correctos
    Success,
    /// Quedan huecos vacíos; no se registra progreso
    Partial { filled: usize, total: usize },
    /// Todo lleno pero con piezas mal colocadas
    Incorrect {
        correct: usize,
        total: usize,
        wrong: Vec<usize>,
    },
}

impl DragOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DragOutcome::Success)
    }

    pub fn message(&self) -> String {
        match self {
            DragOutcome::Success => "🎉 Perfect! All pieces are in the correct place!".into(),
            DragOutcome::Partial { filled, total } => {
                format!("⚠ Please fill in all the blanks! ({filled}/{total} filled)")
            }
            DragOutcome::Incorrect { correct, total, .. } => format!(
                "❌ Not quite right. {correct}/{total} correct. Click the wrong pieces to remove them and try again!"
            ),
        }
    }
}

/// Estado volátil de un ejercicio de arrastrar: qué pieza (por índice) ocupa
/// cada hueco. Las piezas se identifican por posición porque puede haber
/// valores repetidos en el montón.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragBoard {
    slots: Vec<Option<usize>>,
    used: Vec<bool>,
}

impl DragBoard {
    pub fn new(spec: &DragChallenge) -> Self {
        Self {
            slots: vec![None; spec.blanks.len()],
            used: vec![false; spec.pieces.len()],
        }
    }

    /// Coloca la pieza en el hueco si ambos están libres.
    pub fn place(&mut self, blank: usize, piece: usize) -> bool {
        let slot_free = matches!(self.slots.get(blank), Some(None));
        let piece_free = matches!(self.used.get(piece), Some(false));
        if !(slot_free && piece_free) {
            return false;
        }
        self.slots[blank] = Some(piece);
        self.used[piece] = true;
        true
    }

    /// Vacía el hueco y devuelve la pieza al montón.
    pub fn clear(&mut self, blank: usize) -> Option<usize> {
        let piece = self.slots.get_mut(blank)?.take()?;
        if let Some(flag) = self.used.get_mut(piece) {
            *flag = false;
        }
        Some(piece)
    }

    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
        self.used.iter_mut().for_each(|u| *u = false);
    }

    pub fn slot(&self, blank: usize) -> Option<usize> {
        self.slots.get(blank).copied().flatten()
    }

    pub fn is_used(&self, piece: usize) -> bool {
        self.used.get(piece).copied().unwrap_or(false)
    }

    /// Valores colocados, hueco a hueco
    pub fn placed<'a>(&self, spec: &'a DragChallenge) -> Vec<Option<&'a str>> {
        self.slots
            .iter()
            .map(|s| s.and_then(|p| spec.pieces.get(p)).map(String::as_str))
            .collect()
    }
}

pub fn check_drag(spec: &DragChallenge, board: &DragBoard) -> DragOutcome {
    let placed = board.placed(spec);
    let total = spec.blanks.len();
    let filled = placed.iter().filter(|p| p.is_some()).count();

    if filled < total {
        return DragOutcome::Partial { filled, total };
    }

    let wrong: Vec<usize> = spec
        .blanks
        .iter()
        .zip(&placed)
        .enumerate()
        .filter(|(_, (expected, got))| Some(expected.as_str()) != **got)
        .map(|(i, _)| i)
        .collect();

    if wrong.is_empty() {
        DragOutcome::Success
    } else {
        DragOutcome::Incorrect {
            correct: total - wrong.len(),
            total,
            wrong,
        }
    }
}
