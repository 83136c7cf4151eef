use std::fmt;

use crate::anim::ActionTag;

const FULL_ARCHER_SET: &[ActionTag] = &[
    ActionTag::Idle,
    ActionTag::Walk,
    ActionTag::Attack1,
    ActionTag::Attack2,
    ActionTag::Attack3,
    ActionTag::Shot1,
    ActionTag::Shot2,
    ActionTag::Evasion,
    ActionTag::Hurt,
    ActionTag::Dead,
];

const MELEE_SET: &[ActionTag] = &[
    ActionTag::Idle,
    ActionTag::Walk,
    ActionTag::Attack1,
    ActionTag::Attack2,
    ActionTag::Attack3,
    ActionTag::Hurt,
    ActionTag::Dead,
];

const MELEE_ATTACKS: &[ActionTag] = &[ActionTag::Attack1, ActionTag::Attack2, ActionTag::Attack3];
const RANGED_ATTACKS: &[ActionTag] = &[ActionTag::Shot1, ActionTag::Shot2];

/// Tags every actor must load regardless of variant.
pub(crate) const REQUIRED_TAGS: [ActionTag; 4] = [
    ActionTag::Idle,
    ActionTag::Walk,
    ActionTag::Hurt,
    ActionTag::Dead,
];

pub const HERO_STEP: i32 = 5;
pub const ZOMBIE_STEP: i32 = 2;
pub const ARROW_SPEED: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorKind {
    /// Ranged hero.
    Archer,
    Skeleton,
    Zombie,
}

impl ActorKind {
    pub const fn profile(self) -> ActorProfile {
        match self {
            ActorKind::Archer => ActorProfile {
                kind: ActorKind::Archer,
                asset: "archer",
                cell_width: 128,
                cell_height: 128,
                tags: FULL_ARCHER_SET,
                attack_tags: RANGED_ATTACKS,
                move_step: HERO_STEP,
                hit_points: 3,
                hostile: false,
                projectile: Some(ProjectileProfile::ARROW),
            },
            ActorKind::Skeleton => ActorProfile {
                kind: ActorKind::Skeleton,
                asset: "skeleton",
                cell_width: 128,
                cell_height: 128,
                tags: MELEE_SET,
                attack_tags: MELEE_ATTACKS,
                move_step: HERO_STEP,
                hit_points: 3,
                hostile: false,
                projectile: None,
            },
            ActorKind::Zombie => ActorProfile {
                kind: ActorKind::Zombie,
                asset: "zombie",
                cell_width: 96,
                cell_height: 96,
                tags: MELEE_SET,
                attack_tags: MELEE_ATTACKS,
                move_step: ZOMBIE_STEP,
                hit_points: 2,
                hostile: true,
                projectile: None,
            },
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ActorKind::Archer => "archer",
            ActorKind::Skeleton => "skeleton",
            ActorKind::Zombie => "zombie",
        }
    }
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of an actor variant: which sheets it loads, how big a
/// cell is, which tags its `attack` intent chooses from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorProfile {
    pub kind: ActorKind,
    pub asset: &'static str,
    pub cell_width: u32,
    pub cell_height: u32,
    pub tags: &'static [ActionTag],
    pub attack_tags: &'static [ActionTag],
    pub move_step: i32,
    pub hit_points: u32,
    pub hostile: bool,
    pub projectile: Option<ProjectileProfile>,
}

impl ActorProfile {
    pub fn declares(&self, tag: ActionTag) -> bool {
        self.tags.contains(&tag)
    }

    /// First tag the variant needs but does not declare.
    pub(crate) fn first_undeclared_tag(&self) -> Option<ActionTag> {
        REQUIRED_TAGS
            .iter()
            .chain(self.attack_tags)
            .copied()
            .find(|tag| !self.declares(*tag))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectileProfile {
    pub asset: &'static str,
    pub sheet: &'static str,
    pub width: u32,
    pub height: u32,
}

impl ProjectileProfile {
    pub const ARROW: ProjectileProfile = ProjectileProfile {
        asset: "archer",
        sheet: "arrow",
        width: 48,
        height: 16,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_profiles_declare_everything_they_use() {
        for kind in [ActorKind::Archer, ActorKind::Skeleton, ActorKind::Zombie] {
            let profile = kind.profile();
            assert_eq!(profile.kind, kind);
            assert_eq!(profile.first_undeclared_tag(), None, "kind={kind}");
        }
    }

    #[test]
    fn only_the_archer_shoots() {
        let archer = ActorKind::Archer.profile();
        assert_eq!(archer.attack_tags, &[ActionTag::Shot1, ActionTag::Shot2]);
        assert!(archer.projectile.is_some());
        assert!(ActorKind::Zombie.profile().projectile.is_none());
        assert!(ActorKind::Skeleton.profile().projectile.is_none());
    }

    #[test]
    fn melee_variants_have_no_shot_or_evasion_tags() {
        let zombie = ActorKind::Zombie.profile();
        assert!(zombie.hostile);
        assert!(!zombie.declares(ActionTag::Shot1));
        assert!(!zombie.declares(ActionTag::Evasion));
    }

    #[test]
    fn undeclared_attack_tag_is_detected() {
        let profile = ActorProfile {
            attack_tags: RANGED_ATTACKS,
            ..ActorKind::Zombie.profile()
        };
        assert_eq!(profile.first_undeclared_tag(), Some(ActionTag::Shot1));
    }
}
