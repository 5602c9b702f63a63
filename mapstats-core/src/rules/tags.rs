//! Tag names of the fixtures that gamemode requirements look for.
//! Any other tag name is ignored by every rule.

pub const PLAYER_SPAWN: &str = "Player Spawn";
pub const USC_SPAWN: &str = "USC Spawn";
pub const THE_MAN_SPAWN: &str = "THE MAN Spawn";

// Team deathmatch / take over
pub const TDM_FLAG: &str = "TDM Flag";
pub const TAKEOVER_FLAG: &str = "Takeover Flag";

// Capture the flag
pub const USC_CTF_FLAG: &str = "USC CTF Flag";
pub const THE_MAN_CTF_FLAG: &str = "THE MAN CTF Flag";
pub const USC_RESUPPLY: &str = "USC Resupply";
pub const THE_MAN_RESUPPLY: &str = "THE MAN Resupply";
pub const USC_GENERATOR: &str = "USC Generator";
pub const THE_MAN_GENERATOR: &str = "THE MAN Generator";
pub const USC_TURRET: &str = "USC Turret";
pub const THE_MAN_TURRET: &str = "THE MAN Turret";

// Survival
pub const ENEMY_SPAWN_SURVIVAL: &str = "Enemy Spawn (Survival)";
pub const CHEST_SPAWN_SURVIVAL: &str = "Chest Spawn (Survival)";
pub const BAR_SPAWN_SURVIVAL: &str = "Bar Spawn (Survival)";
pub const OBJECTIVE_SPAWN_SURVIVAL: &str = "Objective Spawn (Survival)";
pub const BEACON_SPAWN_SURVIVAL: &str = "Beacon Spawn (Survival)";

// Zombrains
pub const ZOMBIE_SPAWN_ZOMBRAINS: &str = "Zombie Spawn (Zombrains)";
pub const HELICOPTER_SPAWN_ZOMBRAINS: &str = "Helicopter Spawn (Zombrains)";
pub const WEAPON_PRINTER_ZOMBRAINS: &str = "Weapon Printer (Zombrains)";

// Climb
pub const CLIMB_FLAG: &str = "Climb Flag";
