//! Staff members and their per-turn task effects.
//!
//! A staff member owns an assigned task (a free-form string) and converts
//! it into a TaskOutcome once per turn. Only the task matching the
//! member's role produces a non-idle effect; anything else, including an
//! unrecognized string, degrades to the idle effect silently. The fixed
//! cost is charged either way — idle staff still draw a wage.

use crate::{
    context::TurnContext,
    error::{SimError, SimResult},
};
use serde::{Deserialize, Serialize};

/// Canonical task names recognized by the simulation.
pub mod task {
    pub const SALES: &str = "Sales";
    pub const STOCK: &str = "Stock";
    pub const LEAD: &str = "Lead";
    pub const IDLE: &str = "Idle";
}

/// The closed set of staff roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Cashier,
    Stocker,
    Manager,
}

impl Role {
    /// Parse a role name. The role set is closed and exhaustive, so an
    /// unknown name is a construction failure, never a silent default.
    pub fn parse(role: &str) -> SimResult<Role> {
        match role {
            "Cashier" => Ok(Role::Cashier),
            "Stocker" => Ok(Role::Stocker),
            "Manager" => Ok(Role::Manager),
            _ => Err(SimError::UnknownRole {
                role: role.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Cashier => "Cashier",
            Self::Stocker => "Stocker",
            Self::Manager => "Manager",
        }
    }

    /// The task that activates this role's effect.
    pub fn matching_task(&self) -> &'static str {
        match self {
            Self::Cashier => task::SALES,
            Self::Stocker => task::STOCK,
            Self::Manager => task::LEAD,
        }
    }

    /// Per-turn wage, charged whether or not the assigned task matched.
    pub fn fixed_cost(&self) -> f64 {
        match self {
            Self::Cashier | Self::Stocker => 10.0,
            Self::Manager => 15.0,
        }
    }
}

/// The per-staff-member, per-turn computed effect. Produced fresh each
/// turn and consumed immediately by the turn context that owns the turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskOutcome {
    pub staff_name: String,
    pub sales_multiplier: f64,
    pub spoilage_multiplier: f64,
    pub cost: f64,
    pub message: String,
}

impl TaskOutcome {
    /// Identity multipliers, wage still charged.
    fn idle(name: &str, cost: f64) -> Self {
        Self {
            staff_name: name.to_string(),
            sales_multiplier: 1.0,
            spoilage_multiplier: 1.0,
            cost,
            message: format!("{name} is idle."),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMember {
    name: String,
    skill: u8,
    role: Role,
    assigned_task: String,
}

impl StaffMember {
    /// Skill is clamped to [1, 10] at construction. Members start idle.
    pub fn new(role: Role, name: impl Into<String>, skill: i32) -> Self {
        Self {
            name: name.into(),
            skill: skill.clamp(1, 10) as u8,
            role,
            assigned_task: task::IDLE.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn skill(&self) -> u8 {
        self.skill
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn assigned_task(&self) -> &str {
        &self.assigned_task
    }

    /// Any string is accepted; a non-matching one degrades to the idle
    /// effect when the turn runs. Intentional tolerance, not validation
    /// left out.
    pub fn assign_task(&mut self, task: impl Into<String>) {
        self.assigned_task = task.into();
    }

    /// Compute this member's effect for the current turn.
    pub fn perform_task(&self) -> TaskOutcome {
        let cost = self.role.fixed_cost();
        if self.assigned_task != self.role.matching_task() {
            return TaskOutcome::idle(&self.name, cost);
        }

        let skill = f64::from(self.skill);
        let name = &self.name;
        match self.role {
            Role::Cashier => TaskOutcome {
                staff_name: self.name.clone(),
                sales_multiplier: 1.0 + skill * 0.05,
                spoilage_multiplier: 1.0,
                cost,
                message: format!("{name} boosted sales!"),
            },
            Role::Stocker => TaskOutcome {
                staff_name: self.name.clone(),
                sales_multiplier: 1.0,
                spoilage_multiplier: 1.0 - skill * 0.03,
                cost,
                message: format!("{name} reduced spoilage!"),
            },
            Role::Manager => TaskOutcome {
                staff_name: self.name.clone(),
                sales_multiplier: 1.0 + skill * 0.07,
                spoilage_multiplier: 1.0,
                cost,
                message: format!("{name} led the team effectively!"),
            },
        }
    }

    /// Compute the outcome and register it into the side's turn context.
    /// Registration is the only side effect of running a turn.
    pub fn execute_turn(&self, ctx: &mut TurnContext) {
        ctx.register(self.perform_task());
    }
}
