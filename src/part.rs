use strum::{Display, VariantArray};

/// The two answers every puzzle reports, printed as `part 1` and `part 2`.
#[derive(Copy, Clone, Debug, Display, VariantArray, Eq, PartialEq, Hash)]
pub enum Part {
    /// The first answer.
    #[strum(to_string = "part 1")]
    One,
    /// The second answer, usually the first one under harsher parameters.
    #[strum(to_string = "part 2")]
    Two,
}
