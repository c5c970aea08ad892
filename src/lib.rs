// Library root
// -----------
// The binary (`main.rs`) only parses arguments, sets up logging and picks a
// front end; everything else lives here so it can be tested without a
// terminal.
//
// Module responsibilities:
// - `game`: moves, the beats-relation, round resolution and the opponent.
// - `session`: running scores and the awaiting-input/terminated loop state.
// - `prompt`: the line-oriented terminal front end.
// - `board`: pure mapping from a session to what the arcade screen shows.
// - `arcade`: the full-screen, key-driven front end.
// - `cli`: command-line and environment options.
pub mod arcade;
pub mod board;
pub mod cli;
pub mod game;
pub mod prompt;
pub mod session;
