/// Built-in method and constant names of the embedded Ruby runtime, in the
/// order the runtime declares them.
pub const BUILTIN_SYMBOLS: [&str; 133] = [
    "Object", "new", "!", "!=", "<=>", "===", "class", "dup", "block_given?", "is_a?", "kind_of?",
    "nil?", "p", "print", "puts", "raise", "object_id", "instance_methods", "instance_variables",
    "memory_statistics", "attr_reader", "attr_accessor", "sprintf", "printf", "inspect", "to_s",
    "Proc", "call", "NilClass", "to_i", "to_a", "to_h", "to_f", "TrueClass", "FalseClass",
    "Symbol", "all_symbols", "id2name", "to_sym", "Fixnum", "[]", "+@", "-@", "**", "%", "&", "|",
    "^", "~", "<<", ">>", "abs", "chr", "Float", "String", "+", "*", "size", "length", "[]=", "b",
    "clear", "chomp", "chomp!", "empty?", "getbyte", "index", "ord", "slice!", "split", "lstrip",
    "lstrip!", "rstrip", "rstrip!", "strip", "strip!", "intern", "tr", "tr!", "start_with?",
    "end_with?", "include?", "Array", "at", "delete_at", "count", "first", "last", "push", "pop",
    "shift", "unshift", "min", "max", "minmax", "join", "Range", "exclude_end?", "Hash", "delete",
    "has_key?", "has_value?", "key", "keys", "merge", "merge!", "values", "Exception", "message",
    "StandardError", "RuntimeError", "ZeroDivisionError", "ArgumentError", "IndexError",
    "TypeError", "collect", "map", "collect!", "map!", "delete_if", "each", "each_index",
    "each_with_index", "reject!", "reject", "sort!", "sort", "RUBY_VERSION", "MRUBYC_VERSION",
    "times", "loop", "each_byte", "each_char",
];

/// Appended after [`BUILTIN_SYMBOLS`] so constructors resolve like any other
/// built-in method.
pub const CONSTRUCTOR_SYMBOL: &str = "initialize";

/// [`BUILTIN_SYMBOLS`] followed by [`CONSTRUCTOR_SYMBOL`].
pub fn builtin_symbols() -> impl Iterator<Item = &'static str> {
    BUILTIN_SYMBOLS
        .iter()
        .copied()
        .chain(std::iter::once(CONSTRUCTOR_SYMBOL))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_builtin_count() {
        assert_eq!(builtin_symbols().count(), 134);
        assert_eq!(builtin_symbols().last(), Some("initialize"));
        assert_eq!(builtin_symbols().next(), Some("Object"));
    }

    #[test]
    fn test_builtin_names_are_unique() {
        let unique: HashSet<_> = builtin_symbols().collect();
        assert_eq!(unique.len(), 134);
    }
}
