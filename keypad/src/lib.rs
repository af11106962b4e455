pub use history::{History, HistoryEntry};

mod history;

pub use machine::{Calculator, Haptics, Key};

mod machine;
