mod game_over;
mod graph;
mod play;
mod start;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use game_over::GameOverView;
pub use graph::GraphView;
pub use play::PlayView;
pub use start::StartView;
pub use state::ViewError;
