// Application layer: interaction with the person running the tool.

pub mod prompt;
