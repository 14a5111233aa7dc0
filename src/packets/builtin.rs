//! Built-in packet catalog
//!
//! Five packets per concept, in delivery order. Concepts further down the
//! graph have no packets yet.

use super::models::{
    ChallengeContent, ConceptContent, ConnectionContent, ConnectionExample, Packet, PacketContent,
    RecallContent, VisualContent,
};

pub static PACKETS: &[Packet] = &[
    // ─── ARRAYS ───────────────────────────────────────────
    Packet {
        id: "arrays-concept",
        concept_id: "arrays",
        title: "What is an Array?",
        duration: 60,
        content: PacketContent::Concept(ConceptContent {
            explanation: "An array is a collection of items stored at contiguous memory locations. Think of it like a row of lockers: each locker has a number and you can instantly jump to any locker you want.",
            key_points: &[
                "Fixed size in most languages",
                "O(1) access by index",
                "O(n) search without sorting",
                "Foundation of almost every other data structure",
            ],
            analogy: "Imagine a parking lot where every spot is numbered. You can drive directly to spot 42 without checking every spot first.",
        }),
    },
    Packet {
        id: "arrays-visual",
        concept_id: "arrays",
        title: "See Arrays in Action",
        duration: 90,
        content: PacketContent::Visual(VisualContent {
            animation: "arrays",
            instruction: "Tap any element to highlight it and see its index",
            interactable: true,
            data: &[3, 7, 1, 9, 4, 6, 2, 8],
            target: None,
        }),
    },
    Packet {
        id: "arrays-challenge",
        concept_id: "arrays",
        title: "Quick Challenge",
        duration: 300,
        content: PacketContent::Challenge(ChallengeContent {
            question: "Given array [2, 4, 6, 8, 10], what is the value at index 3?",
            options: &["6", "8", "4", "10"],
            correct: "8",
            explanation: "Arrays are zero indexed. Index 0=2, 1=4, 2=6, 3=8, 4=10. So index 3 is 8.",
        }),
    },
    Packet {
        id: "arrays-connection",
        concept_id: "arrays",
        title: "Arrays in the Real World",
        duration: 60,
        content: PacketContent::Connection(ConnectionContent {
            examples: &[
                ConnectionExample {
                    title: "Your Instagram Feed",
                    description: "Every post in your feed is stored in an array. Scrolling down is just iterating through it.",
                },
                ConnectionExample {
                    title: "Spotify Queue",
                    description: "Your music queue is an array. Skip is just moving to the next index.",
                },
                ConnectionExample {
                    title: "Excel Spreadsheet",
                    description: "Every row in Excel is an array of cells. Every column too.",
                },
            ],
        }),
    },
    Packet {
        id: "arrays-recall",
        concept_id: "arrays",
        title: "Memory Check",
        duration: 60,
        content: PacketContent::Recall(RecallContent {
            question: "What is the time complexity of accessing an element by index in an array?",
            answer: "O(1), constant time",
            follow_up: "Because arrays store elements in contiguous memory, the computer can calculate the exact memory address instantly using: base address + (index × element size)",
        }),
    },
    // ─── STRINGS ──────────────────────────────────────────
    Packet {
        id: "strings-concept",
        concept_id: "strings",
        title: "What is a String?",
        duration: 60,
        content: PacketContent::Concept(ConceptContent {
            explanation: "A string is a sequence of characters. Under the hood most languages store it as an array of characters (or bytes), so everything you know about arrays applies.",
            key_points: &[
                "Indexed like an array",
                "Often immutable: edits create a new string",
                "Concatenating in a loop can cost O(n²)",
                "Comparing two strings is O(n)",
            ],
            analogy: "A string is a necklace of letter beads. You can count along to any bead, but swapping a bead in an immutable necklace means restringing a new one.",
        }),
    },
    Packet {
        id: "strings-visual",
        concept_id: "strings",
        title: "Reverse a String",
        duration: 90,
        content: PacketContent::Visual(VisualContent {
            animation: "string-reverse",
            instruction: "Tap Next to swap the outermost characters and move inward",
            interactable: true,
            data: &[104, 101, 108, 108, 111],
            target: None,
        }),
    },
    Packet {
        id: "strings-challenge",
        concept_id: "strings",
        title: "String Challenge",
        duration: 300,
        content: PacketContent::Challenge(ChallengeContent {
            question: "Which is the cheapest way to build a long string from many small pieces?",
            options: &[
                "Concatenate with + in a loop",
                "Collect pieces and join once",
                "Reverse it twice",
                "Convert each piece to a number",
            ],
            correct: "Collect pieces and join once",
            explanation: "Repeated + copies the growing string each time. Collecting the pieces and joining once copies every character exactly once.",
        }),
    },
    Packet {
        id: "strings-connection",
        concept_id: "strings",
        title: "Strings Everywhere",
        duration: 60,
        content: PacketContent::Connection(ConnectionContent {
            examples: &[
                ConnectionExample {
                    title: "Search Bars",
                    description: "Every keystroke in a search box is string matching against titles and tags.",
                },
                ConnectionExample {
                    title: "Spell Checkers",
                    description: "Suggestions come from comparing your word with dictionary strings character by character.",
                },
                ConnectionExample {
                    title: "URLs",
                    description: "Routers split URL strings on slashes to decide which page to show.",
                },
            ],
        }),
    },
    Packet {
        id: "strings-recall",
        concept_id: "strings",
        title: "Memory Check",
        duration: 60,
        content: PacketContent::Recall(RecallContent {
            question: "Why can building a string with + inside a loop be slow?",
            answer: "Each + copies the whole string so far, giving O(n²) total work",
            follow_up: "Immutable strings cannot grow in place. A builder or join keeps the pieces and copies them once at the end.",
        }),
    },
    // ─── HASH MAPS ────────────────────────────────────────
    Packet {
        id: "hashmaps-concept",
        concept_id: "hashmaps",
        title: "What is a Hash Map?",
        duration: 60,
        content: PacketContent::Concept(ConceptContent {
            explanation: "A hash map stores key value pairs. A hash function turns each key into an array index, so finding a value means computing one index instead of searching.",
            key_points: &[
                "Average O(1) insert, lookup and delete",
                "Built on top of an array of buckets",
                "Collisions happen when two keys hash to the same bucket",
                "No guaranteed ordering of keys",
            ],
            analogy: "A coat check: you hand over your coat, get a ticket number, and later the ticket takes the attendant straight to the right hook.",
        }),
    },
    Packet {
        id: "hashmaps-visual",
        concept_id: "hashmaps",
        title: "Watch Keys Find Buckets",
        duration: 90,
        content: PacketContent::Visual(VisualContent {
            animation: "hashmaps",
            instruction: "Tap a key to see it hashed into one of eight buckets",
            interactable: true,
            data: &[12, 7, 33, 18, 25, 4],
            target: None,
        }),
    },
    Packet {
        id: "hashmaps-challenge",
        concept_id: "hashmaps",
        title: "Hash Map Challenge",
        duration: 300,
        content: PacketContent::Challenge(ChallengeContent {
            question: "You need to check whether any two numbers in a list sum to a target. What does a hash map buy you?",
            options: &["O(n²) to O(n)", "O(n) to O(1)", "O(log n) to O(1)", "Nothing"],
            correct: "O(n²) to O(n)",
            explanation: "Store each number as you go and ask whether target minus the current number is already in the map. One pass instead of checking every pair.",
        }),
    },
    Packet {
        id: "hashmaps-connection",
        concept_id: "hashmaps",
        title: "Hash Maps in the Wild",
        duration: 60,
        content: PacketContent::Connection(ConnectionContent {
            examples: &[
                ConnectionExample {
                    title: "Phone Contacts",
                    description: "Looking up a contact by name is a key lookup, not a scan through every entry.",
                },
                ConnectionExample {
                    title: "Browser Cache",
                    description: "Browsers map URLs to cached files so a repeat visit skips the network.",
                },
                ConnectionExample {
                    title: "Databases",
                    description: "Hash indexes jump straight to rows with an exact key match.",
                },
            ],
        }),
    },
    Packet {
        id: "hashmaps-recall",
        concept_id: "hashmaps",
        title: "Memory Check",
        duration: 60,
        content: PacketContent::Recall(RecallContent {
            question: "What happens when two keys hash to the same bucket?",
            answer: "A collision, resolved by chaining or probing",
            follow_up: "Chaining keeps a small list per bucket; probing looks for the next free slot. Good hash functions keep collisions rare so operations stay O(1) on average.",
        }),
    },
    // ─── TWO POINTERS ─────────────────────────────────────
    Packet {
        id: "two-pointers-concept",
        concept_id: "two-pointers",
        title: "What are Two Pointers?",
        duration: 60,
        content: PacketContent::Concept(ConceptContent {
            explanation: "Two pointers walk through an array at the same time, usually from both ends toward the middle or both from the start at different speeds. Each step moves one pointer, so the whole scan is linear.",
            key_points: &[
                "Turns many O(n²) pair searches into O(n)",
                "Works best on sorted arrays",
                "Uses O(1) extra space",
                "Also used to detect cycles with fast and slow pointers",
            ],
            analogy: "Two people searching a bookshelf from opposite ends, each stepping inward until they meet.",
        }),
    },
    Packet {
        id: "two-pointers-visual",
        concept_id: "two-pointers",
        title: "Pointers Closing In",
        duration: 90,
        content: PacketContent::Visual(VisualContent {
            animation: "two-pointers",
            instruction: "Tap Next to move the pointer whose sum is too small or too large",
            interactable: true,
            data: &[1, 2, 4, 7, 11, 15],
            target: Some(15),
        }),
    },
    Packet {
        id: "two-pointers-challenge",
        concept_id: "two-pointers",
        title: "Two Pointers Challenge",
        duration: 300,
        content: PacketContent::Challenge(ChallengeContent {
            question: "In sorted [1, 2, 4, 7, 11, 15] looking for a pair summing to 15, the pointers start at 1 and 15. Which pointer moves first?",
            options: &["Left moves right", "Right moves left", "Both move", "Neither, 1 + 15 = 15"],
            correct: "Right moves left",
            explanation: "1 + 15 = 16 is too big, so the right pointer moves left to a smaller number. Then 1 + 11 = 12 is too small and the left pointer moves right.",
        }),
    },
    Packet {
        id: "two-pointers-connection",
        concept_id: "two-pointers",
        title: "Two Pointers in Practice",
        duration: 60,
        content: PacketContent::Connection(ConnectionContent {
            examples: &[
                ConnectionExample {
                    title: "Merging Playlists",
                    description: "Merging two sorted lists walks one pointer through each list, always taking the smaller item.",
                },
                ConnectionExample {
                    title: "Palindrome Check",
                    description: "Compare characters from both ends moving inward.",
                },
                ConnectionExample {
                    title: "Diff Tools",
                    description: "Comparing two versions of a file advances a pointer through each version line by line.",
                },
            ],
        }),
    },
    Packet {
        id: "two-pointers-recall",
        concept_id: "two-pointers",
        title: "Memory Check",
        duration: 60,
        content: PacketContent::Recall(RecallContent {
            question: "Why does the two pointer pair search need a sorted array?",
            answer: "Sorting tells you which pointer to move",
            follow_up: "If the sum is too small only moving left forward can increase it; too large and only moving right backward can decrease it. Without order there is no safe move.",
        }),
    },
    // ─── SLIDING WINDOW ───────────────────────────────────
    Packet {
        id: "sliding-window-concept",
        concept_id: "sliding-window",
        title: "What is a Sliding Window?",
        duration: 60,
        content: PacketContent::Concept(ConceptContent {
            explanation: "A sliding window keeps track of a contiguous range of an array or string. Instead of recomputing each range from scratch, you add the element entering the window and remove the one leaving it.",
            key_points: &[
                "For subarray and substring problems",
                "Fixed size or variable size windows",
                "Each element enters and leaves once: O(n)",
                "Often paired with a hash map of counts",
            ],
            analogy: "Reading a long sentence through a paper cutout: slide it one word to the right and only the words at the edges change.",
        }),
    },
    Packet {
        id: "sliding-window-visual",
        concept_id: "sliding-window",
        title: "Slide the Window",
        duration: 90,
        content: PacketContent::Visual(VisualContent {
            animation: "sliding-window",
            instruction: "Tap Next to slide a window of size 3 and watch the running sum",
            interactable: true,
            data: &[2, 1, 5, 1, 3, 2],
            target: Some(3),
        }),
    },
    Packet {
        id: "sliding-window-challenge",
        concept_id: "sliding-window",
        title: "Sliding Window Challenge",
        duration: 300,
        content: PacketContent::Challenge(ChallengeContent {
            question: "What is the largest sum of 3 consecutive numbers in [2, 1, 5, 1, 3, 2]?",
            options: &["8", "9", "7", "6"],
            correct: "9",
            explanation: "Windows: 2+1+5=8, 1+5+1=7, 5+1+3=9, 1+3+2=6. The best is 9, found by adding one number and dropping one per step.",
        }),
    },
    Packet {
        id: "sliding-window-connection",
        concept_id: "sliding-window",
        title: "Windows in the Real World",
        duration: 60,
        content: PacketContent::Connection(ConnectionContent {
            examples: &[
                ConnectionExample {
                    title: "Rate Limiting",
                    description: "APIs count requests in the last minute by sliding a time window forward.",
                },
                ConnectionExample {
                    title: "Fitness Trackers",
                    description: "Your seven day step average drops the oldest day and adds today.",
                },
                ConnectionExample {
                    title: "Network Protocols",
                    description: "TCP only keeps a window of unacknowledged packets in flight at once.",
                },
            ],
        }),
    },
    Packet {
        id: "sliding-window-recall",
        concept_id: "sliding-window",
        title: "Memory Check",
        duration: 60,
        content: PacketContent::Recall(RecallContent {
            question: "Why is a sliding window O(n) instead of O(n × k)?",
            answer: "Each step only adds one element and removes one",
            follow_up: "Recomputing every window costs k per position. Updating the running result at the edges costs O(1) per position.",
        }),
    },
    // ─── BINARY SEARCH ────────────────────────────────────
    Packet {
        id: "binary-search-concept",
        concept_id: "binary-search",
        title: "What is Binary Search?",
        duration: 60,
        content: PacketContent::Concept(ConceptContent {
            explanation: "Binary search is a way to find an item in a sorted list by repeatedly cutting the search space in half. Instead of checking every element, you always check the middle.",
            key_points: &[
                "Only works on sorted arrays",
                "O(log n) time complexity",
                "Divide and conquer approach",
                "Used everywhere in real systems",
            ],
            analogy: "Imagine guessing a number between 1 and 100. The smart strategy is always guess 50 first. Too high? Guess 25. Too low? Guess 75. You find it in at most 7 guesses.",
        }),
    },
    Packet {
        id: "binary-search-visual",
        concept_id: "binary-search",
        title: "Watch Binary Search",
        duration: 90,
        content: PacketContent::Visual(VisualContent {
            animation: "binary-search",
            instruction: "Tap Next to step through each iteration",
            interactable: true,
            data: &[1, 3, 5, 7, 9, 11, 13, 15, 17, 19],
            target: Some(13),
        }),
    },
    Packet {
        id: "binary-search-challenge",
        concept_id: "binary-search",
        title: "Binary Search Challenge",
        duration: 300,
        content: PacketContent::Challenge(ChallengeContent {
            question: "In array [1, 3, 5, 7, 9], how many steps does binary search take to find 7?",
            options: &["1 step", "2 steps", "3 steps", "4 steps"],
            correct: "2 steps",
            explanation: "Step 1: Check middle element 5. 7 > 5 so search right half. Step 2: Check middle of [7,9] which is 7. Found it!",
        }),
    },
    Packet {
        id: "binary-search-connection",
        concept_id: "binary-search",
        title: "Binary Search Everywhere",
        duration: 60,
        content: PacketContent::Connection(ConnectionContent {
            examples: &[
                ConnectionExample {
                    title: "Git Bisect",
                    description: "Git uses binary search to find which commit introduced a bug. It cuts the commit history in half each time.",
                },
                ConnectionExample {
                    title: "Database Indexes",
                    description: "When you search a database, it uses binary search on indexed columns to find rows instantly.",
                },
                ConnectionExample {
                    title: "Dictionary",
                    description: "Opening a physical dictionary to the middle and deciding left or right is literally binary search.",
                },
            ],
        }),
    },
    Packet {
        id: "binary-search-recall",
        concept_id: "binary-search",
        title: "Memory Check",
        duration: 60,
        content: PacketContent::Recall(RecallContent {
            question: "What is the prerequisite for binary search to work?",
            answer: "The array must be sorted",
            follow_up: "Without sorting, you cannot determine which half to discard. Sorting is what makes the divide and conquer strategy valid.",
        }),
    },
];
