// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! pair {
    // FlashcardPair shorthand: pair!("term", "definition")
    ($term:expr, $definition:expr $(,)?) => {
        $crate::model::FlashcardPair::new($term, $definition)
    };
}
