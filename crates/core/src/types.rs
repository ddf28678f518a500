use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct EnemyId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn offset(self, dy: i32, dx: i32) -> Self {
        Self { y: self.y + dy, x: self.x + dx }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dy, dx) = direction.delta();
        self.offset(dy, dx)
    }

    pub fn manhattan(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Orthogonal neighbours in the order right, left, down, up.
    pub fn neighbors(self) -> [Pos; 4] {
        [self.offset(0, 1), self.offset(0, -1), self.offset(1, 0), self.offset(-1, 0)]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// `(dy, dx)` with y growing downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Terrain {
    Wall,
    Floor,
}

/// What currently stands on a floor cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Occupant {
    HealthPotion,
    Sword,
    Player,
    Enemy(EnemyId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Item {
    HealthPotion,
    Sword,
}

impl From<Item> for Occupant {
    fn from(item: Item) -> Self {
        match item {
            Item::HealthPotion => Occupant::HealthPotion,
            Item::Sword => Occupant::Sword,
        }
    }
}

/// Flattened per-cell view handed to render consumers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellTag {
    Wall,
    Floor,
    HealthPotion,
    Sword,
    PlayerOccupied,
    EnemyOccupied,
}

impl CellTag {
    pub fn glyph(self) -> char {
        match self {
            CellTag::Wall => '#',
            CellTag::Floor => '.',
            CellTag::HealthPotion => '!',
            CellTag::Sword => '/',
            CellTag::PlayerOccupied => '@',
            CellTag::EnemyOccupied => 'E',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    Move(Direction),
    Attack,
}

impl Command {
    pub const MOVE_UP: Command = Command::Move(Direction::Up);
    pub const MOVE_DOWN: Command = Command::Move(Direction::Down);
    pub const MOVE_LEFT: Command = Command::Move(Direction::Left);
    pub const MOVE_RIGHT: Command = Command::Move(Direction::Right);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pickup {
    HealthPotion { healed: i32 },
    Sword { attack_bonus: i32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockReason {
    OutOfBounds,
    Wall,
    Enemy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Moved { to: Pos, pickup: Option<Pickup> },
    Blocked(BlockReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackHit {
    pub enemy: EnemyId,
    pub damage: i32,
    pub remaining_hp: i32,
    pub killed: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttackReport {
    pub hits: Vec<AttackHit>,
}

impl AttackReport {
    pub fn kills(&self) -> usize {
        self.hits.iter().filter(|hit| hit.killed).count()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnReport {
    Move(MoveOutcome),
    Attack(AttackReport),
}

impl TurnReport {
    /// Whether the turn changed any session state.
    pub fn mutated(&self) -> bool {
        match self {
            TurnReport::Move(outcome) => matches!(outcome, MoveOutcome::Moved { .. }),
            TurnReport::Attack(report) => !report.hits.is_empty(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyAction {
    Attacked { damage: i32 },
    Moved { from: Pos, to: Pos },
    Held,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u64,
    pub actions: Vec<(EnemyId, EnemyAction)>,
}

impl TickReport {
    pub fn damage_to_player(&self) -> i32 {
        self.actions
            .iter()
            .map(|(_, action)| match action {
                EnemyAction::Attacked { damage } => *damage,
                _ => 0,
            })
            .sum()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogEvent {
    PotionDrunk { healed: i32, hp: i32 },
    SwordTaken { attack: i32 },
    EnemyHit { pos: Pos, damage: i32, remaining_hp: i32 },
    EnemySlain { pos: Pos },
    PlayerHit { damage: i32, hp: i32 },
}

impl LogEvent {
    pub fn message(&self) -> String {
        match self {
            LogEvent::PotionDrunk { healed, hp } => {
                format!("You drink a potion (+{healed} hp, now {hp}).")
            }
            LogEvent::SwordTaken { attack } => format!("You take a sword (attack {attack})."),
            LogEvent::EnemyHit { damage, remaining_hp, .. } => {
                format!("You hit an enemy for {damage} ({remaining_hp} hp left).")
            }
            LogEvent::EnemySlain { .. } => "An enemy falls.".to_string(),
            LogEvent::PlayerHit { damage, hp } => {
                format!("An enemy hits you for {damage} ({hp} hp left).")
            }
        }
    }
}
