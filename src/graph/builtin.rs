//! Built-in concept graph
//!
//! Declaration order is significant: the unlock scan walks this table front to
//! back and picks the first ready concept.

use super::models::{Category, ConceptNode};

/// Every concept in the reference curriculum, in unlock-scan order
pub static DSA_GRAPH: &[ConceptNode] = &[
    // Basics
    ConceptNode {
        id: "arrays",
        name: "Arrays",
        difficulty: 1,
        category: Category::Basics,
        dependencies: &[],
        description: "The foundation of all data structures",
    },
    ConceptNode {
        id: "strings",
        name: "Strings",
        difficulty: 1,
        category: Category::Basics,
        dependencies: &[],
        description: "Sequences of characters and manipulation",
    },
    ConceptNode {
        id: "hashmaps",
        name: "Hash Maps",
        difficulty: 2,
        category: Category::Basics,
        dependencies: &["arrays"],
        description: "Key value storage with O(1) lookup",
    },
    ConceptNode {
        id: "two-pointers",
        name: "Two Pointers",
        difficulty: 2,
        category: Category::Algorithms,
        dependencies: &["arrays"],
        description: "Efficient array traversal technique",
    },
    ConceptNode {
        id: "sliding-window",
        name: "Sliding Window",
        difficulty: 2,
        category: Category::Algorithms,
        dependencies: &["arrays"],
        description: "Subarray and substring problems",
    },
    ConceptNode {
        id: "binary-search",
        name: "Binary Search",
        difficulty: 2,
        category: Category::Algorithms,
        dependencies: &["arrays"],
        description: "Divide and conquer search in sorted arrays",
    },
    ConceptNode {
        id: "linked-list",
        name: "Linked List",
        difficulty: 2,
        category: Category::DataStructures,
        dependencies: &["arrays"],
        description: "Dynamic linear data structure with pointers",
    },
    ConceptNode {
        id: "stack",
        name: "Stack",
        difficulty: 2,
        category: Category::DataStructures,
        dependencies: &["arrays"],
        description: "LIFO data structure",
    },
    ConceptNode {
        id: "queue",
        name: "Queue",
        difficulty: 2,
        category: Category::DataStructures,
        dependencies: &["arrays"],
        description: "FIFO data structure",
    },
    ConceptNode {
        id: "recursion",
        name: "Recursion",
        difficulty: 3,
        category: Category::Algorithms,
        dependencies: &["arrays"],
        description: "Functions that call themselves",
    },
    ConceptNode {
        id: "trees",
        name: "Binary Trees",
        difficulty: 3,
        category: Category::DataStructures,
        dependencies: &["linked-list", "recursion"],
        description: "Hierarchical data structure with nodes",
    },
    ConceptNode {
        id: "bst",
        name: "Binary Search Tree",
        difficulty: 3,
        category: Category::DataStructures,
        dependencies: &["trees", "binary-search"],
        description: "Sorted binary tree for efficient search",
    },
    ConceptNode {
        id: "heap",
        name: "Heap / Priority Queue",
        difficulty: 3,
        category: Category::DataStructures,
        dependencies: &["trees"],
        description: "Complete binary tree for min/max operations",
    },
    // Intermediate algorithms
    ConceptNode {
        id: "sorting",
        name: "Sorting Algorithms",
        difficulty: 2,
        category: Category::Algorithms,
        dependencies: &["arrays", "recursion"],
        description: "Merge sort, quick sort, and other comparison sorts",
    },
    ConceptNode {
        id: "backtracking",
        name: "Backtracking",
        difficulty: 3,
        category: Category::Algorithms,
        dependencies: &["recursion"],
        description: "Explore all possibilities and prune invalid paths",
    },
    // Graphs
    ConceptNode {
        id: "graphs",
        name: "Graphs",
        difficulty: 3,
        category: Category::DataStructures,
        dependencies: &["hashmaps", "recursion"],
        description: "Nodes connected by edges, adjacency list/matrix",
    },
    ConceptNode {
        id: "bfs",
        name: "Breadth-First Search",
        difficulty: 3,
        category: Category::Algorithms,
        dependencies: &["graphs", "queue"],
        description: "Level-order traversal of graphs and trees",
    },
    ConceptNode {
        id: "dfs",
        name: "Depth-First Search",
        difficulty: 3,
        category: Category::Algorithms,
        dependencies: &["graphs", "stack", "recursion"],
        description: "Deep traversal of graphs and trees",
    },
    ConceptNode {
        id: "topological-sort",
        name: "Topological Sort",
        difficulty: 4,
        category: Category::Algorithms,
        dependencies: &["graphs", "dfs"],
        description: "Linear ordering of vertices in a DAG",
    },
    ConceptNode {
        id: "dijkstra",
        name: "Dijkstra's Algorithm",
        difficulty: 4,
        category: Category::Algorithms,
        dependencies: &["graphs", "heap"],
        description: "Shortest path in weighted graphs",
    },
    ConceptNode {
        id: "union-find",
        name: "Union Find / Disjoint Set",
        difficulty: 4,
        category: Category::DataStructures,
        dependencies: &["graphs"],
        description: "Track connected components efficiently",
    },
    // Advanced data structures
    ConceptNode {
        id: "trie",
        name: "Trie",
        difficulty: 3,
        category: Category::DataStructures,
        dependencies: &["strings", "trees"],
        description: "Prefix tree for efficient string operations",
    },
    ConceptNode {
        id: "segment-tree",
        name: "Segment Tree",
        difficulty: 4,
        category: Category::DataStructures,
        dependencies: &["trees", "recursion"],
        description: "Range query and update operations",
    },
    // Dynamic programming
    ConceptNode {
        id: "dp-1d",
        name: "1D Dynamic Programming",
        difficulty: 3,
        category: Category::Algorithms,
        dependencies: &["recursion", "arrays"],
        description: "Optimal substructure with single dimension state",
    },
    ConceptNode {
        id: "dp-2d",
        name: "2D Dynamic Programming",
        difficulty: 4,
        category: Category::Algorithms,
        dependencies: &["dp-1d"],
        description: "Grid-based and two-state DP problems",
    },
    ConceptNode {
        id: "dp-knapsack",
        name: "Knapsack Problems",
        difficulty: 4,
        category: Category::Algorithms,
        dependencies: &["dp-1d"],
        description: "Subset selection with constraints",
    },
    ConceptNode {
        id: "dp-trees",
        name: "DP on Trees",
        difficulty: 5,
        category: Category::Algorithms,
        dependencies: &["dp-1d", "trees", "dfs"],
        description: "Dynamic programming on tree structures",
    },
    // Advanced algorithms
    ConceptNode {
        id: "greedy",
        name: "Greedy Algorithms",
        difficulty: 3,
        category: Category::Algorithms,
        dependencies: &["sorting", "heap"],
        description: "Locally optimal choices for global optimum",
    },
    ConceptNode {
        id: "intervals",
        name: "Intervals",
        difficulty: 3,
        category: Category::Algorithms,
        dependencies: &["sorting", "arrays"],
        description: "Merge, insert, and schedule interval problems",
    },
    ConceptNode {
        id: "bit-manipulation",
        name: "Bit Manipulation",
        difficulty: 3,
        category: Category::Algorithms,
        dependencies: &["arrays"],
        description: "Bitwise operations and tricks",
    },
    ConceptNode {
        id: "math-geometry",
        name: "Math & Geometry",
        difficulty: 3,
        category: Category::Algorithms,
        dependencies: &["arrays"],
        description: "Number theory, GCD, modular arithmetic, geometry",
    },
    // Expert level
    ConceptNode {
        id: "mst",
        name: "Minimum Spanning Tree",
        difficulty: 4,
        category: Category::Algorithms,
        dependencies: &["graphs", "union-find", "heap"],
        description: "Kruskal's and Prim's algorithms",
    },
    ConceptNode {
        id: "network-flow",
        name: "Network Flow",
        difficulty: 5,
        category: Category::Algorithms,
        dependencies: &["graphs", "bfs"],
        description: "Max flow / min cut problems",
    },
    ConceptNode {
        id: "string-matching",
        name: "Advanced String Matching",
        difficulty: 5,
        category: Category::Algorithms,
        dependencies: &["strings", "dp-2d"],
        description: "KMP, Rabin-Karp, and suffix arrays",
    },];
