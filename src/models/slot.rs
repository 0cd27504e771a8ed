/// Time-of-day bucket a count is recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Morning,
    Afternoon,
    Evening,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::Morning, Slot::Afternoon, Slot::Evening];

    pub fn label(&self) -> &'static str {
        match self {
            Slot::Morning => "Morning",
            Slot::Afternoon => "Afternoon",
            Slot::Evening => "Evening",
        }
    }
}
