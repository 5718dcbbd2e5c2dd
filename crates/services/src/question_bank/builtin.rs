use surf_core::model::{Equation, QuestionDraft, QuestionId, Solution};

use crate::error::QuestionBankError;

type Coefficients = (f64, f64, f64);

/// Curated surf-themed systems: (id, context, equation I, equation II, solution).
const BUILTIN: &[(u64, &str, Coefficients, Coefficients, (f64, f64))] = &[
    (
        1,
        "A surf school rented out 10 boards this morning. Longboards outnumber shortboards by 2. How many longboards (x) and shortboards (y) were rented?",
        (1.0, 1.0, 10.0),
        (1.0, -1.0, 2.0),
        (6.0, 4.0),
    ),
    (
        2,
        "Two lessons and three board rentals cost 120, while one lesson and one rental cost 50. Find the price of a lesson (x) and of a rental (y).",
        (2.0, 3.0, 120.0),
        (1.0, 1.0, 50.0),
        (30.0, 20.0),
    ),
    (
        3,
        "A surfer caught 14 waves. Twice the number of lefts (x) minus the number of rights (y) is 4. How many of each did they ride?",
        (1.0, 1.0, 14.0),
        (2.0, -1.0, 4.0),
        (6.0, 8.0),
    ),
    (
        4,
        "Three bars of warm-water wax and two bars of cold-water wax cost 19; one of each costs 7. Find the price of warm (x) and cold (y) wax.",
        (3.0, 2.0, 19.0),
        (1.0, 1.0, 7.0),
        (5.0, 2.0),
    ),
    (
        5,
        "There are 25 surfers and bodyboarders on the beach, with 5 more surfers (x) than bodyboarders (y). How many of each?",
        (1.0, 1.0, 25.0),
        (1.0, -1.0, 5.0),
        (15.0, 10.0),
    ),
    (
        6,
        "A wetsuit (x) costs three times as much as a leash (y), and together they cost 160. Find both prices.",
        (1.0, -3.0, 0.0),
        (1.0, 1.0, 160.0),
        (120.0, 40.0),
    ),
    (
        7,
        "The swell period (x) plus twice the wave height (y) is 16, and the period minus the height is 7. Find x and y.",
        (1.0, 2.0, 16.0),
        (1.0, -1.0, 7.0),
        (10.0, 3.0),
    ),
    (
        8,
        "A surf camp fits 36 campers in 4 tents of type A (x people each) and 3 tents of type B (y people each). A type A tent holds 2 more people than type B. Find x and y.",
        (4.0, 3.0, 36.0),
        (1.0, -1.0, 2.0),
        (6.0, 4.0),
    ),
    (
        9,
        "Five fins and two leashes cost 65; three fins and four leashes cost 67. Find the price of a fin (x) and of a leash (y).",
        (5.0, 2.0, 65.0),
        (3.0, 4.0, 67.0),
        (9.0, 10.0),
    ),
    (
        10,
        "A lifeguard counted 30 people in the water. There were twice as many swimmers (x) as surfers (y). How many of each?",
        (1.0, 1.0, 30.0),
        (1.0, -2.0, 0.0),
        (20.0, 10.0),
    ),
    (
        11,
        "Paddling out took x minutes and riding back took y minutes. Together they took 12 minutes, and three times the paddle minus the ride is 20. Find both times.",
        (1.0, 1.0, 12.0),
        (3.0, -1.0, 20.0),
        (8.0, 4.0),
    ),
    (
        12,
        "A board shop sold 7 boards: foam boards (x) at 150 each and epoxy boards (y) at 400 each, for 1800 in total. How many of each?",
        (1.0, 1.0, 7.0),
        (150.0, 400.0, 1800.0),
        (4.0, 3.0),
    ),
    (
        13,
        "Two crests add up to 3.5 m, and the first (x) is 0.5 m taller than the second (y). Find both heights.",
        (1.0, 1.0, 3.5),
        (1.0, -1.0, 0.5),
        (2.0, 1.5),
    ),
    (
        14,
        "On a surf trip, 2 days of car rental plus 1 hostel night cost 130, and 1 day of car rental plus 2 nights cost 110. Find the daily car rate (x) and nightly rate (y).",
        (2.0, 1.0, 130.0),
        (1.0, 2.0, 110.0),
        (50.0, 30.0),
    ),
    (
        15,
        "The sea temperature (x) minus the air temperature (y) is -4, and their sum is 40. Find both temperatures.",
        (1.0, -1.0, -4.0),
        (1.0, 1.0, 40.0),
        (18.0, 22.0),
    ),
    (
        16,
        "Judges award x points for a barrel and y points for an aerial. Two barrels and one aerial score 17; one barrel and three aerials score 16. Find x and y.",
        (2.0, 1.0, 17.0),
        (1.0, 3.0, 16.0),
        (7.0, 3.0),
    ),
    (
        17,
        "Three coconut waters and two smoothies cost 16; two coconut waters and three smoothies cost 19. Find the price of a coconut water (x) and of a smoothie (y).",
        (3.0, 2.0, 16.0),
        (2.0, 3.0, 19.0),
        (2.0, 5.0),
    ),
    (
        18,
        "A surfer paddled x km and swam y km, 6 km in all. The paddled distance minus three times the swim is 2. Find x and y.",
        (1.0, 1.0, 6.0),
        (1.0, -3.0, 2.0),
        (5.0, 1.0),
    ),
    (
        19,
        "This week had 9 sessions: tow-in sessions (x) of 4 hours and paddle sessions (y) of 2 hours, 24 hours in total. How many of each?",
        (1.0, 1.0, 9.0),
        (4.0, 2.0, 24.0),
        (3.0, 6.0),
    ),
    (
        20,
        "A rental fleet has 6 more soft-tops (x) than fibreglass boards (y), and three times the fibreglass count is 2 less than the soft-tops. Find x and y.",
        (1.0, -1.0, 6.0),
        (1.0, -3.0, 2.0),
        (8.0, 2.0),
    ),
];

/// Drafts for the built-in bank, in authoring order.
pub(crate) fn builtin_drafts() -> Result<Vec<QuestionDraft>, QuestionBankError> {
    BUILTIN
        .iter()
        .map(|&(id, context, (a1, b1, c1), (a2, b2, c2), (x, y))| {
            let id = QuestionId::new(id);
            let equations = Equation::new(a1, b1, c1)
                .and_then(|first| Ok([first, Equation::new(a2, b2, c2)?]))
                .map_err(|source| QuestionBankError::InvalidEquation { id, source })?;
            Ok(QuestionDraft::new(id, context, equations, Solution::new(x, y)))
        })
        .collect()
}
