//! Clojure core forms

pub const CLOJURE_CORE: &[&str] = &[
    // special forms and binding macros
    "def", "defn", "defn-", "defmacro", "defmulti", "defmethod", "defprotocol", "defrecord",
    "deftype", "defonce", "fn", "let", "letfn", "if", "if-not", "if-let", "if-some", "when",
    "when-not", "when-let", "when-some", "when-first", "cond", "condp", "case", "do", "loop",
    "recur", "for", "doseq", "dotimes", "while", "try", "catch", "finally", "throw", "quote",
    "var", "binding", "and", "or", "not", "ns", "require", "import", "use",
    // sequences
    "map", "mapv", "mapcat", "filter", "filterv", "remove", "reduce", "reductions", "first",
    "second", "last", "rest", "next", "nth", "cons", "conj", "concat", "seq", "vec", "list",
    "vector", "set", "take", "take-while", "take-last", "drop", "drop-while", "drop-last",
    "range", "repeat", "repeatedly", "iterate", "cycle", "interleave", "interpose",
    "partition", "partition-all", "partition-by", "group-by", "frequencies", "distinct",
    "sort", "sort-by", "reverse", "flatten", "into", "count", "empty", "some", "every?",
    "not-any?", "not-every?", "keep", "keep-indexed", "map-indexed", "zipmap", "apply",
    "comp", "partial", "juxt", "identity", "constantly", "complement", "memoize",
    // maps
    "get", "get-in", "assoc", "assoc-in", "dissoc", "update", "update-in", "merge",
    "merge-with", "keys", "vals", "select-keys", "contains?", "find", "hash-map",
    "sorted-map", "hash-set", "sorted-set", "disj",
    // predicates
    "nil?", "some?", "true?", "false?", "zero?", "pos?", "neg?", "even?", "odd?", "empty?",
    "seq?", "coll?", "map?", "vector?", "list?", "set?", "string?", "number?", "integer?",
    "keyword?", "symbol?", "fn?", "identical?",
    // numbers and strings
    "inc", "dec", "max", "min", "mod", "rem", "quot", "str", "subs", "format", "name",
    "keyword", "symbol", "int", "double", "num", "rand", "rand-int",
    // side effects and state
    "println", "print", "prn", "pr", "atom", "deref", "ref", "dosync",
    "alter", "doall", "dorun", "lazy-seq", "time",
];
