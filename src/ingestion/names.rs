use fake::Fake;
use fake::faker::name::en::Name;

/// Supplies a plausible full name for each ingested fragment.
pub trait NameSource {
    fn full_name(&mut self) -> String;
}

/// English full names from the `fake` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeNames;

impl NameSource for FakeNames {
    fn full_name(&mut self) -> String {
        Name().fake()
    }
}
