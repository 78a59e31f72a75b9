/// Static study guidance served verbatim by the relay. Ordered, never
/// generated, never changes at runtime.
pub const EXAM_TIPS: [&str; 5] = [
    "Start with a clear definition",
    "Mention interdependence",
    "Use one real-world example",
    "Explain kinked demand curve briefly",
    "Link answer to consumer welfare",
];
