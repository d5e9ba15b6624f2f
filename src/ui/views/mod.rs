pub mod demos;
pub mod lesson;
pub mod lesson_menu;
pub mod practice_coding;
pub mod practice_drag;
pub mod practice_quiz;
