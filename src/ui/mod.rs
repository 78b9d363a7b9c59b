// SPDX-License-Identifier: GPL-3.0-only
pub mod command;
pub mod console;
pub mod render;

pub use command::{parse_command, Command, CommandError};
pub use console::Console;
pub use render::render_table;
