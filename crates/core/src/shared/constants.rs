/// Number of reference positions examined for each spoken token:
/// the current position plus two of lookahead.
pub const DEFAULT_LOOKAHEAD_WINDOW: usize = 3;

/// Punctuation removed during token normalization. Apostrophes are not
/// in this set ("word's" keeps its apostrophe).
pub const STRIPPED_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Built-in practice passages for the CLI.
pub const SAMPLE_PASSAGES: &[&str] = &[
    "The cat sat on the mat. The cat looked at the mat and then looked at \
     the hat. The hat was on the mat. The mat was flat. The cat liked the \
     flat mat with the hat on it. The cat did not like the rat, but the cat \
     liked the mat.",
    "In 2023, the teacher taught the class about planets. The teacher said \
     that planets are round, and planets move around the sun. The class \
     listened to the teacher as the teacher wrote the names of the planets. \
     In 2023, the class also learned that planets have moons, and some \
     planets have many moons.",
];
