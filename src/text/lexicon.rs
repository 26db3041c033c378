// file: src/text/lexicon.rs
// description: static English word tables backing the tagger and the lemmatizer
// reference: https://docs.rs/lazy_static

use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

lazy_static! {
    /// Irregular verb forms mapped to their infinitive.
    pub static ref VERB_EXCEPTIONS: HashMap<&'static str, &'static str> = [
        ("am", "be"), ("are", "be"), ("is", "be"), ("was", "be"), ("were", "be"),
        ("been", "be"), ("being", "be"),
        ("has", "have"), ("had", "have"), ("having", "have"),
        ("does", "do"), ("did", "do"), ("done", "do"), ("doing", "do"),
        ("goes", "go"), ("went", "go"), ("gone", "go"),
        ("ran", "run"), ("saw", "see"), ("seen", "see"),
        ("said", "say"), ("says", "say"), ("made", "make"),
        ("took", "take"), ("taken", "take"), ("came", "come"),
        ("got", "get"), ("gotten", "get"), ("gave", "give"), ("given", "give"),
        ("knew", "know"), ("known", "know"), ("thought", "think"),
        ("told", "tell"), ("found", "find"), ("left", "leave"), ("felt", "feel"),
        ("kept", "keep"), ("brought", "bring"), ("bought", "buy"), ("buying", "buy"),
        ("began", "begin"), ("begun", "begin"), ("wrote", "write"), ("written", "write"),
        ("spoke", "speak"), ("spoken", "speak"), ("stood", "stand"),
        ("understood", "understand"), ("heard", "hear"), ("held", "hold"),
        ("led", "lead"), ("met", "meet"), ("paid", "pay"), ("sent", "send"),
        ("built", "build"), ("lost", "lose"), ("fell", "fall"), ("fallen", "fall"),
        ("ate", "eat"), ("eaten", "eat"), ("drove", "drive"), ("driven", "drive"),
        ("chose", "choose"), ("chosen", "choose"), ("grew", "grow"), ("grown", "grow"),
        ("drew", "draw"), ("drawn", "draw"), ("flew", "fly"), ("flown", "fly"),
        ("threw", "throw"), ("thrown", "throw"), ("broke", "break"), ("broken", "break"),
        ("sold", "sell"), ("caught", "catch"), ("taught", "teach"), ("fought", "fight"),
        ("sought", "seek"), ("won", "win"), ("sat", "sit"), ("became", "become"),
        ("slept", "sleep"), ("spent", "spend"), ("meant", "mean"), ("rose", "rise"),
        ("risen", "rise"), ("wore", "wear"), ("worn", "wear"), ("hid", "hide"),
        ("hidden", "hide"), ("died", "die"), ("dying", "die"), ("lied", "lie"),
        ("lying", "lie"), ("tied", "tie"), ("tying", "tie"), ("agreed", "agree"),
        ("freed", "free"), ("guaranteed", "guarantee"), ("created", "create"),
        ("creating", "create"), ("used", "use"),
    ]
    .into_iter()
    .collect();

    /// Irregular plurals mapped to their singular.
    pub static ref NOUN_EXCEPTIONS: HashMap<&'static str, &'static str> = [
        ("men", "man"), ("women", "woman"), ("children", "child"), ("feet", "foot"),
        ("teeth", "tooth"), ("geese", "goose"), ("mice", "mouse"), ("oxen", "ox"),
        ("wolves", "wolf"), ("leaves", "leaf"), ("lives", "life"), ("wives", "wife"),
        ("knives", "knife"), ("halves", "half"), ("selves", "self"),
        ("shelves", "shelf"), ("thieves", "thief"), ("loaves", "loaf"),
        ("calves", "calf"), ("heroes", "hero"), ("potatoes", "potato"),
        ("tomatoes", "tomato"), ("echoes", "echo"), ("analyses", "analysis"),
        ("crises", "crisis"), ("theses", "thesis"), ("phenomena", "phenomenon"),
        ("criteria", "criterion"), ("indices", "index"), ("matrices", "matrix"),
        ("data", "datum"),
    ]
    .into_iter()
    .collect();

    /// Comparative and superlative forms mapped to the positive degree.
    pub static ref ADJECTIVE_EXCEPTIONS: HashMap<&'static str, &'static str> = [
        ("better", "good"), ("best", "good"), ("worse", "bad"), ("worst", "bad"),
        ("less", "little"), ("least", "little"), ("elder", "old"), ("eldest", "old"),
        ("farther", "far"), ("farthest", "far"), ("further", "far"), ("furthest", "far"),
        ("larger", "large"), ("largest", "large"), ("smaller", "small"),
        ("smallest", "small"), ("greater", "great"), ("greatest", "great"),
        ("older", "old"), ("oldest", "old"), ("younger", "young"),
        ("youngest", "young"), ("higher", "high"), ("highest", "high"),
        ("lower", "low"), ("lowest", "low"), ("longer", "long"), ("longest", "long"),
        ("stronger", "strong"), ("strongest", "strong"), ("faster", "fast"),
        ("fastest", "fast"), ("later", "late"), ("latest", "late"),
        ("closer", "close"), ("closest", "close"), ("nearer", "near"),
        ("nearest", "near"), ("wider", "wide"), ("widest", "wide"),
        ("bigger", "big"), ("biggest", "big"), ("hotter", "hot"), ("hottest", "hot"),
        ("thinner", "thin"), ("thinnest", "thin"), ("sadder", "sad"),
        ("saddest", "sad"), ("wetter", "wet"), ("wettest", "wet"),
    ]
    .into_iter()
    .collect();

    pub static ref ADVERB_EXCEPTIONS: HashMap<&'static str, &'static str> = [
        ("best", "well"), ("better", "well"), ("deeper", "deeply"),
        ("harder", "hard"), ("hardest", "hard"),
    ]
    .into_iter()
    .collect();

    /// Words whose suffixes look inflectional but are part of the base form.
    pub static ref INVARIANT_WORDS: HashSet<&'static str> = [
        "always", "perhaps", "sometimes", "afterwards", "towards", "besides",
        "news", "series", "species", "means", "physics", "mathematics",
        "economics", "politics", "ethics", "during", "nothing", "something",
        "anything", "everything", "morning", "evening", "ceiling", "indeed",
        "hundred", "kindred", "sacred", "naked", "wicked", "wretched", "beloved",
        "rugged", "crooked", "bias", "atlas", "alias", "canvas", "soldier", "cashier",
        "frontier", "barrier", "carrier", "courier", "glacier", "premier", "dossier",
        "terrier", "supplier", "copier",
    ]
    .into_iter()
    .collect();
}
