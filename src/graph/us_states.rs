// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compiled-in adjacency table of the US states.
//!
//! The 48 contiguous states list the states they share a border with.
//! Alaska and Hawaii border no other state and are kept as isolated regions.

use super::{AdjacencyGraph, AsymmetryPolicy};
use crate::error::Result;

/// Number of entries in [`US_STATES`].
pub const US_STATE_COUNT: usize = 50;

/// `(state, bordering states)` in enumeration order.
pub const US_STATES: &[(&str, &[&str])] = &[
    (
        "Alabama",
        &["Florida", "Georgia", "Mississippi", "Tennessee"],
    ),
    ("Alaska", &[]),
    (
        "Arizona",
        &["California", "Colorado", "Nevada", "New Mexico", "Utah"],
    ),
    (
        "Arkansas",
        &[
            "Louisiana",
            "Mississippi",
            "Missouri",
            "Oklahoma",
            "Tennessee",
            "Texas",
        ],
    ),
    ("California", &["Arizona", "Nevada", "Oregon"]),
    (
        "Colorado",
        &[
            "Arizona",
            "Kansas",
            "Nebraska",
            "New Mexico",
            "Oklahoma",
            "Utah",
            "Wyoming",
        ],
    ),
    (
        "Connecticut",
        &["Massachusetts", "New York", "Rhode Island"],
    ),
    ("Delaware", &["Maryland", "New Jersey", "Pennsylvania"]),
    ("Florida", &["Alabama", "Georgia"]),
    (
        "Georgia",
        &[
            "Alabama",
            "Florida",
            "North Carolina",
            "South Carolina",
            "Tennessee",
        ],
    ),
    ("Hawaii", &[]),
    (
        "Idaho",
        &[
            "Montana",
            "Nevada",
            "Oregon",
            "Utah",
            "Washington",
            "Wyoming",
        ],
    ),
    (
        "Illinois",
        &["Indiana", "Iowa", "Kentucky", "Missouri", "Wisconsin"],
    ),
    ("Indiana", &["Illinois", "Kentucky", "Michigan", "Ohio"]),
    (
        "Iowa",
        &[
            "Illinois",
            "Minnesota",
            "Missouri",
            "Nebraska",
            "South Dakota",
            "Wisconsin",
        ],
    ),
    ("Kansas", &["Colorado", "Missouri", "Nebraska", "Oklahoma"]),
    (
        "Kentucky",
        &[
            "Illinois",
            "Indiana",
            "Missouri",
            "Ohio",
            "Tennessee",
            "Virginia",
            "West Virginia",
        ],
    ),
    ("Louisiana", &["Arkansas", "Mississippi", "Texas"]),
    ("Maine", &["New Hampshire"]),
    (
        "Maryland",
        &["Delaware", "Pennsylvania", "Virginia", "West Virginia"],
    ),
    (
        "Massachusetts",
        &[
            "Connecticut",
            "New Hampshire",
            "New York",
            "Rhode Island",
            "Vermont",
        ],
    ),
    ("Michigan", &["Indiana", "Ohio", "Wisconsin"]),
    (
        "Minnesota",
        &["Iowa", "North Dakota", "South Dakota", "Wisconsin"],
    ),
    (
        "Mississippi",
        &["Alabama", "Arkansas", "Louisiana", "Tennessee"],
    ),
    (
        "Missouri",
        &[
            "Arkansas",
            "Illinois",
            "Iowa",
            "Kansas",
            "Kentucky",
            "Nebraska",
            "Oklahoma",
            "Tennessee",
        ],
    ),
    (
        "Montana",
        &["Idaho", "North Dakota", "South Dakota", "Wyoming"],
    ),
    (
        "Nebraska",
        &[
            "Colorado",
            "Iowa",
            "Kansas",
            "Missouri",
            "South Dakota",
            "Wyoming",
        ],
    ),
    (
        "Nevada",
        &["Arizona", "California", "Idaho", "Oregon", "Utah"],
    ),
    ("New Hampshire", &["Maine", "Massachusetts", "Vermont"]),
    ("New Jersey", &["Delaware", "New York", "Pennsylvania"]),
    (
        "New Mexico",
        &["Arizona", "Colorado", "Oklahoma", "Texas", "Utah"],
    ),
    (
        "New York",
        &[
            "Connecticut",
            "Massachusetts",
            "New Jersey",
            "Pennsylvania",
            "Rhode Island",
            "Vermont",
        ],
    ),
    (
        "North Carolina",
        &["Georgia", "South Carolina", "Tennessee", "Virginia"],
    ),
    ("North Dakota", &["Minnesota", "Montana", "South Dakota"]),
    (
        "Ohio",
        &[
            "Indiana",
            "Kentucky",
            "Michigan",
            "Pennsylvania",
            "West Virginia",
        ],
    ),
    (
        "Oklahoma",
        &[
            "Arkansas",
            "Colorado",
            "Kansas",
            "Missouri",
            "New Mexico",
            "Texas",
        ],
    ),
    ("Oregon", &["California", "Idaho", "Nevada", "Washington"]),
    (
        "Pennsylvania",
        &[
            "Delaware",
            "Maryland",
            "New Jersey",
            "New York",
            "Ohio",
            "West Virginia",
        ],
    ),
    (
        "Rhode Island",
        &["Connecticut", "Massachusetts", "New York"],
    ),
    ("South Carolina", &["Georgia", "North Carolina"]),
    (
        "South Dakota",
        &[
            "Iowa",
            "Minnesota",
            "Montana",
            "Nebraska",
            "North Dakota",
            "Wyoming",
        ],
    ),
    (
        "Tennessee",
        &[
            "Alabama",
            "Arkansas",
            "Georgia",
            "Kentucky",
            "Mississippi",
            "Missouri",
            "North Carolina",
            "Virginia",
        ],
    ),
    (
        "Texas",
        &["Arkansas", "Louisiana", "New Mexico", "Oklahoma"],
    ),
    (
        "Utah",
        &[
            "Arizona",
            "Colorado",
            "Idaho",
            "Nevada",
            "New Mexico",
            "Wyoming",
        ],
    ),
    ("Vermont", &["Massachusetts", "New Hampshire", "New York"]),
    (
        "Virginia",
        &[
            "Kentucky",
            "Maryland",
            "North Carolina",
            "Tennessee",
            "West Virginia",
        ],
    ),
    ("Washington", &["Idaho", "Oregon"]),
    (
        "West Virginia",
        &["Kentucky", "Maryland", "Ohio", "Pennsylvania", "Virginia"],
    ),
    ("Wisconsin", &["Illinois", "Iowa", "Michigan", "Minnesota"]),
    (
        "Wyoming",
        &[
            "Colorado",
            "Idaho",
            "Montana",
            "Nebraska",
            "South Dakota",
            "Utah",
        ],
    ),
];

/// Build the reference US state graph.
///
/// The table is symmetric, so it is built under [`AsymmetryPolicy::Reject`]:
/// an edit that breaks symmetry fails loudly instead of being repaired.
pub fn us_states() -> Result<AdjacencyGraph> {
    AdjacencyGraph::from_table(US_STATES, AsymmetryPolicy::Reject)
}
