// Terminal rendering of ranked results and token sets.

pub mod terminal;
