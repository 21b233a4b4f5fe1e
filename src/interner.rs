use string_interner::{DefaultBackend, DefaultSymbol, StringInterner};

/// Interned name: identifiers, type names and qualified names.
pub type Symbol = DefaultSymbol;

type Interner = StringInterner<DefaultBackend>;

thread_local! {
    static INTERNER: std::cell::RefCell<Interner> =
        std::cell::RefCell::new(StringInterner::new());
}

/// Intern a string and return its symbol
pub fn intern(s: &str) -> Symbol {
    INTERNER.with(|interner| interner.borrow_mut().get_or_intern(s))
}

/// Resolve a symbol back to its string
pub fn resolve(sym: Symbol) -> Option<String> {
    INTERNER.with(|interner| interner.borrow().resolve(sym).map(|s| s.to_string()))
}
