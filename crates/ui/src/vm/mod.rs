mod feedback_vm;
mod game_over_vm;
mod game_vm;
mod graph_vm;
mod question_vm;
mod time_fmt;

pub use feedback_vm::{FeedbackVm, StepVm, map_feedback};
pub use game_over_vm::GameOverVm;
pub use game_vm::GameVm;
pub use graph_vm::{GraphRowVm, GraphVm, SeriesVm, map_graph};
pub use question_vm::{QuestionVm, map_question};
