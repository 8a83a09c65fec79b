//! Built-in English tables.

/// Stop words, checked before lemmatization.
pub(crate) const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "amount",
    "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are",
    "around", "as", "at", "back", "be", "became", "because", "become", "becomes", "becoming",
    "been", "before", "beforehand", "behind", "being", "below", "beside", "besides", "between",
    "beyond", "both", "bottom", "but", "by", "ca", "call", "can", "cannot", "could", "did", "do",
    "does", "doing", "done", "down", "due", "during", "each", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "fifteen", "fifty", "first", "five", "for", "former",
    "formerly", "forty", "four", "from", "front", "full", "further", "get", "give", "go", "had",
    "has", "have", "he", "hence", "her", "here", "hereafter", "hereby", "herein", "hereupon",
    "hers", "herself", "him", "himself", "his", "how", "however", "hundred", "i", "if", "in",
    "indeed", "into", "is", "it", "its", "itself", "just", "keep", "last", "latter", "latterly",
    "least", "less", "made", "make", "many", "may", "me", "meanwhile", "might", "mine", "more",
    "moreover", "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely",
    "neither", "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor",
    "not", "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto",
    "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own", "part",
    "per", "perhaps", "please", "put", "quite", "rather", "re", "really", "regarding", "same",
    "say", "see", "seem", "seemed", "seeming", "seems", "serious", "several", "she", "should",
    "show", "side", "since", "six", "sixty", "so", "some", "somehow", "someone", "something",
    "sometime", "sometimes", "somewhere", "still", "such", "take", "ten", "than", "that", "the",
    "their", "them", "themselves", "then", "thence", "there", "thereafter", "thereby", "therefore",
    "therein", "thereupon", "these", "they", "third", "this", "those", "though", "three",
    "through", "throughout", "thru", "thus", "to", "together", "too", "top", "toward", "towards",
    "twelve", "twenty", "two", "under", "unless", "until", "up", "upon", "us", "used", "using",
    "various", "very", "via", "was", "we", "well", "were", "what", "whatever", "when", "whence",
    "whenever", "where", "whereafter", "whereas", "whereby", "wherein", "whereupon", "wherever",
    "whether", "which", "while", "whither", "who", "whoever", "whole", "whom", "whose", "why",
    "will", "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
];

/// Irregular inflections mapped to their lemma.
pub(crate) const LEMMA_EXCEPTIONS: &[(&str, &str)] = &[
    ("am", "be"),
    ("are", "be"),
    ("ate", "eat"),
    ("began", "begin"),
    ("begun", "begin"),
    ("best", "good"),
    ("better", "good"),
    ("bought", "buy"),
    ("broke", "break"),
    ("broken", "break"),
    ("brought", "bring"),
    ("built", "build"),
    ("came", "come"),
    ("caught", "catch"),
    ("children", "child"),
    ("did", "do"),
    ("does", "do"),
    ("done", "do"),
    ("drove", "drive"),
    ("eaten", "eat"),
    ("feet", "foot"),
    ("felt", "feel"),
    ("flew", "fly"),
    ("forgot", "forget"),
    ("forgotten", "forget"),
    ("fought", "fight"),
    ("found", "find"),
    ("gave", "give"),
    ("geese", "goose"),
    ("given", "give"),
    ("gone", "go"),
    ("got", "get"),
    ("had", "have"),
    ("has", "have"),
    ("heard", "hear"),
    ("held", "hold"),
    ("is", "be"),
    ("kept", "keep"),
    ("knew", "know"),
    ("knives", "knife"),
    ("known", "know"),
    ("leaves", "leaf"),
    ("led", "lead"),
    ("lives", "life"),
    ("lost", "lose"),
    ("made", "make"),
    ("meant", "mean"),
    ("men", "man"),
    ("met", "meet"),
    ("mice", "mouse"),
    ("paid", "pay"),
    ("ran", "run"),
    ("said", "say"),
    ("sang", "sing"),
    ("sat", "sit"),
    ("saw", "see"),
    ("seen", "see"),
    ("sent", "send"),
    ("slept", "sleep"),
    ("sold", "sell"),
    ("spent", "spend"),
    ("spoke", "speak"),
    ("stood", "stand"),
    ("sung", "sing"),
    ("swam", "swim"),
    ("taken", "take"),
    ("taught", "teach"),
    ("teeth", "tooth"),
    ("thought", "think"),
    ("told", "tell"),
    ("took", "take"),
    ("understood", "understand"),
    ("was", "be"),
    ("went", "go"),
    ("were", "be"),
    ("wives", "wife"),
    ("women", "woman"),
    ("won", "win"),
    ("worse", "bad"),
    ("worst", "bad"),
    ("wrote", "write"),
    ("written", "write"),
];

/// Known base forms. Inflection rules that need a dictionary check only
/// produce candidates found here; words listed here are never rewritten.
pub(crate) const LEXICON: &[&str] = &[
    // verbs
    "agree", "annoy", "appreciate", "argue", "ask", "believe", "blame", "break", "bring", "buy",
    "care", "change", "chat", "cheer", "come", "complain", "crash", "cry", "dance", "delay",
    "deliver", "die", "disappoint", "dislike", "drive", "eat", "enjoy", "fail", "fear", "feel",
    "fight", "find", "finish", "fix", "fly", "forget", "forgive", "frustrate", "hate", "hear",
    "help", "hope", "hurt", "ignore", "improve", "joke", "kill", "know", "laugh", "learn", "leave",
    "like", "listen", "live", "look", "lose", "love", "meet", "miss", "need", "open", "pay", "plan",
    "play", "praise", "recommend", "refuse", "regret", "reply", "respond", "rock", "ruin", "run",
    "scream", "share", "shop", "sing", "sit", "sleep", "smile", "solve", "speak", "stand", "start",
    "stop", "struggle", "succeed", "suck", "support", "swim", "talk", "teach", "tell", "thank",
    "think", "travel", "try", "understand", "use", "visit", "wait", "walk", "want",
    "waste", "watch", "win", "wish", "work", "worry", "write",
    // nouns
    "app", "bug", "cat", "child", "class", "day", "dog", "friend", "game", "job", "joy", "life",
    "man", "meeting", "message", "minute", "money", "morning", "mouse", "movie", "music", "news",
    "night", "person", "phone", "problem", "service", "stuff", "team", "thing", "time", "today",
    "week", "weekend", "woman", "word", "world", "year",
    // adjectives, including participial ones that keep their form
    "amazing", "angry", "annoyed", "annoying", "average", "awesome", "awful", "bad", "big",
    "bored", "boring", "brilliant", "busy", "calm", "confused", "confusing", "cool", "crazy",
    "delighted", "depressed", "disappointed", "disappointing", "easy", "excellent", "excited",
    "exciting", "fantastic", "fine", "frustrated", "frustrating", "fun", "funny", "glad", "good",
    "great", "happy", "hard", "horrible", "interested", "interesting", "lonely", "lovely", "mad",
    "neutral", "new", "nice", "normal", "old", "perfect", "pleased", "poor", "sad", "satisfied",
    "scared", "slow", "sorry", "stressed", "surprised", "surprising", "terrible", "tired",
    "ugly", "unhappy", "upset", "useless", "wonderful", "worried", "wrong",
];

/// Suffix rules as `(suffix, replacement, requires_known)`, tried in order.
pub(crate) const SUFFIX_RULES: &[(&str, &str, bool)] = &[
    ("ies", "y", true),
    ("ches", "ch", true),
    ("shes", "sh", true),
    ("sses", "ss", false),
    ("xes", "x", true),
    ("zes", "z", true),
    ("ves", "f", true),
    ("s", "", false),
    ("es", "", true),
    ("ing", "", true),
    ("ing", "e", true),
    ("ied", "y", true),
    ("ed", "", true),
    ("ed", "e", true),
    ("ier", "y", true),
    ("iest", "y", true),
    ("er", "", true),
    ("est", "", true),
];
