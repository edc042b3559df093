//! The Game of Life board graph.
//!
//! Spaces are nodes keyed by `SpaceId`. Each space points at the next one,
//! or forks into a branch taken when the player opted in at the preceding
//! decision space (night school, family path, risky road). Retirement is the
//! only dead end.
//!
//! ```text
//!  college ─┐
//!           ├─ ... ─ night school ─┬─ (taken) ───┐
//!  career ──┘                      └─ (skipped) ─┴─ ... ─ retirement
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::ContentError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpaceId(pub u16);

impl std::fmt::Display for SpaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What happens on landing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpaceKind {
    Blank,
    Action,
    Pet,
    House,
    Payday,
    SpinToWin,
    PayMoney { amount: i64 },
    GetMoney { amount: i64 },
    Baby,
    Twins,
    Triplets,
    Graduation,
    Married,
    /// Spin; `babies[spin - 1]` children are born.
    SpinForBabies { babies: [u8; 10] },
    NightSchool,
    FamilyPath,
    RiskyRoad,
    Retirement,
}

impl SpaceKind {
    /// Stop spaces halt movement even with steps left over.
    #[must_use]
    pub fn is_stop(&self) -> bool {
        matches!(
            self,
            SpaceKind::Graduation
                | SpaceKind::Married
                | SpaceKind::SpinForBabies { .. }
                | SpaceKind::NightSchool
                | SpaceKind::FamilyPath
                | SpaceKind::RiskyRoad
                | SpaceKind::Retirement
        )
    }

    /// Stops that ask the player which way to go at the next fork.
    #[must_use]
    pub fn is_decision(&self) -> bool {
        matches!(self, SpaceKind::NightSchool | SpaceKind::FamilyPath | SpaceKind::RiskyRoad)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Next {
    To(SpaceId),
    Branch { taken: SpaceId, skipped: SpaceId },
    End,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSpace {
    pub kind: SpaceKind,
    pub next: Next,
}

/// Where a move ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Landing {
    pub space: SpaceId,
    pub steps: u8,
    /// Payday spaces passed, counting the landing space.
    pub paydays_passed: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    spaces: FxHashMap<SpaceId, BoardSpace>,
    college_start: SpaceId,
    career_start: SpaceId,
}

impl Board {
    /// Build and validate a board.
    pub fn new(
        spaces: FxHashMap<SpaceId, BoardSpace>,
        college_start: SpaceId,
        career_start: SpaceId,
    ) -> Result<Self, ContentError> {
        let board = Self {
            spaces,
            college_start,
            career_start,
        };
        board.validate()?;
        Ok(board)
    }

    /// Check the graph: both starts exist, every pointer lands on a space,
    /// and retirement is the only dead end.
    pub fn validate(&self) -> Result<(), ContentError> {
        for start in [self.college_start, self.career_start] {
            if !self.spaces.contains_key(&start) {
                return Err(ContentError::InvalidBoard(format!("start space {start} missing")));
            }
        }
        for (id, space) in &self.spaces {
            let targets = match space.next {
                Next::To(n) => vec![n],
                Next::Branch { .. } if !space.kind.is_decision() => {
                    return Err(ContentError::InvalidBoard(format!("{id} forks without asking")));
                }
                Next::Branch { taken, skipped } => vec![taken, skipped],
                Next::End if space.kind == SpaceKind::Retirement => continue,
                Next::End => return Err(ContentError::InvalidBoard(format!("{id} is a dead end"))),
            };
            if space.kind == SpaceKind::Retirement {
                return Err(ContentError::InvalidBoard(format!("retirement {id} leads somewhere")));
            }
            if let Some(bad) = targets.iter().find(|t| !self.spaces.contains_key(t)) {
                return Err(ContentError::InvalidBoard(format!("{id} points at missing {bad}")));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn college_start(&self) -> SpaceId {
        self.college_start
    }

    #[must_use]
    pub fn career_start(&self) -> SpaceId {
        self.career_start
    }

    #[must_use]
    pub fn get(&self, id: SpaceId) -> Option<&BoardSpace> {
        self.spaces.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Walk `steps` spaces from `from`, stopping early on a stop space.
    ///
    /// `take_branch` picks the taken side of any fork on the way.
    #[must_use]
    pub fn next_space(&self, from: SpaceId, steps: u8, take_branch: bool) -> Landing {
        let mut current = from;
        let mut moved = 0;
        let mut paydays = 0;

        while moved < steps.max(1) {
            let Some(space) = self.spaces.get(&current) else { break };
            current = match space.next {
                Next::To(next) => next,
                Next::Branch { taken, .. } if take_branch => taken,
                Next::Branch { skipped, .. } => skipped,
                Next::End => break,
            };
            moved += 1;

            let Some(landed) = self.spaces.get(&current) else { break };
            if landed.kind == SpaceKind::Payday {
                paydays += 1;
            }
            if landed.kind.is_stop() {
                break;
            }
        }

        Landing {
            space: current,
            steps: moved,
            paydays_passed: paydays,
        }
    }

    /// The board the bot ships with.
    #[must_use]
    pub fn standard() -> Self {
        use SpaceKind::*;

        let mut b = BoardBuilder::default();
        let (college_start, college_end) = b.track(vec![Blank, Action, Pet, Action, PayMoney { amount: 50_000 }, Action, Graduation]);
        let (career_start, career_end) = b.track(vec![Blank, Payday, Action, House, Pet, Action]);

        let (main_start, night_school) = b.track(vec![
            Payday, Action, Pet, SpinToWin, Action, Married, Action, House, Payday, Baby, Action, Pet, NightSchool,
        ]);
        b.link(college_end, main_start);
        b.link(career_end, main_start);

        let (school_start, school_end) = b.track(vec![Action, PayMoney { amount: 20_000 }, Payday, Action]);
        let (work_start, work_end) = b.track(vec![Action, House, Pet, Payday]);
        let (middle_start, family) = b.track(vec![Action, Baby, Payday, SpinToWin, Action, FamilyPath]);
        b.branch(night_school, school_start, work_start);
        b.link(school_end, middle_start);
        b.link(work_end, middle_start);

        let (family_start, family_end) = b.track(vec![
            Baby,
            Twins,
            Pet,
            SpinForBabies { babies: [0, 0, 0, 1, 1, 1, 1, 2, 2, 3] },
            Triplets,
            House,
            Payday,
        ]);
        let (quiet_start, quiet_end) = b.track(vec![Action, Payday, Pet, Action, GetMoney { amount: 50_000 }]);
        let (late_start, risky) = b.track(vec![Action, House, Payday, Pet, RiskyRoad]);
        b.branch(family, family_start, quiet_start);
        b.link(family_end, late_start);
        b.link(quiet_end, late_start);

        let (risky_start, risky_end) = b.track(vec![
            PayMoney { amount: 100_000 },
            GetMoney { amount: 200_000 },
            Action,
            Payday,
            PayMoney { amount: 150_000 },
            GetMoney { amount: 300_000 },
        ]);
        let (safe_start, safe_end) = b.track(vec![Action, Payday, Pet, Action]);
        let (final_start, _) = b.track(vec![Payday, SpinToWin, Action, Pet, House, Payday, Action, Retirement]);
        b.branch(risky, risky_start, safe_start);
        b.link(risky_end, final_start);
        b.link(safe_end, final_start);

        Self {
            spaces: b.spaces,
            college_start,
            career_start,
        }
    }
}

/// Assembles a board from straight tracks.
#[derive(Default)]
struct BoardBuilder {
    spaces: FxHashMap<SpaceId, BoardSpace>,
    next_id: u16,
}

impl BoardBuilder {
    /// Lay out consecutive spaces. The last one dead-ends until linked.
    fn track(&mut self, kinds: Vec<SpaceKind>) -> (SpaceId, SpaceId) {
        let first = SpaceId(self.next_id);
        let count = kinds.len();
        for (i, kind) in kinds.into_iter().enumerate() {
            let id = SpaceId(self.next_id);
            self.next_id += 1;
            let next = if i + 1 < count { Next::To(SpaceId(self.next_id)) } else { Next::End };
            self.spaces.insert(id, BoardSpace { kind, next });
        }
        (first, SpaceId(self.next_id - 1))
    }

    fn link(&mut self, from: SpaceId, to: SpaceId) {
        if let Some(space) = self.spaces.get_mut(&from) {
            space.next = Next::To(to);
        }
    }

    fn branch(&mut self, from: SpaceId, taken: SpaceId, skipped: SpaceId) {
        if let Some(space) = self.spaces.get_mut(&from) {
            space.next = Next::Branch { taken, skipped };
        }
    }
}
