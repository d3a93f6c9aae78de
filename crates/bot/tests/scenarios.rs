//! End-to-end turns through `GreedyBot` on hand-built boards.

use board::{Board, BoardSnapshot, Displacement, GameObject, ObjectId, ObjectKind, Position};
use bot::selectors::direct_or_relay_diamond;
use bot::{BotConfig, GreedyBot, Phase, TurnContext};

const BASE: Position = Position::new(0, 0);
const ME: ObjectId = ObjectId(1);

fn me_at(position: Position, held: u32) -> GameObject {
    GameObject::bot(ME.0, position, BASE, held, 60_000)
}

fn board(width: u32, height: u32, me: &GameObject, others: Vec<GameObject>) -> Board {
    let mut objects = vec![me.clone()];
    objects.extend(others);
    Board::new(width, height, objects).unwrap()
}

/// Minimal game rules: walk, teleport, pick up diamonds, bank at base.
struct World {
    width: u32,
    height: u32,
    me: GameObject,
    objects: Vec<GameObject>,
    collected: Vec<Position>,
}

impl World {
    fn new(width: u32, height: u32, me: GameObject, objects: Vec<GameObject>) -> Self {
        Self {
            width,
            height,
            me,
            objects,
            collected: Vec::new(),
        }
    }

    fn board(&self) -> Board {
        board(self.width, self.height, &self.me, self.objects.clone())
    }

    fn turn(&mut self, bot: &mut GreedyBot) -> Displacement {
        let board = self.board();
        let step = bot.next_move(&self.me, &board);
        assert!(step.is_cardinal_step());

        let mut position = self.me.position.offset(step);
        assert!(board.contains(position), "stepped off the board to {position}");

        if let Some(entry) = board
            .teleporters()
            .find(|teleporter| teleporter.position == position)
            && let Some(exit) = board.linked_teleporter(entry)
        {
            position = exit.position;
        }

        if let Some(index) = self
            .objects
            .iter()
            .position(|o| o.is(ObjectKind::Diamond) && o.position == position)
        {
            let diamond = self.objects.remove(index);
            self.me.properties.diamonds = Some(self.me.diamonds_held() + diamond.points());
            self.collected.push(position);
        }
        if position == BASE {
            self.me.properties.diamonds = Some(0);
        }

        self.me.position = position;
        step
    }
}

#[test]
fn empty_board_roams_east() {
    let me = me_at(BASE, 0);
    let board = board(10, 10, &me, Vec::new());
    let mut bot = GreedyBot::new(BotConfig::default());

    assert_eq!(bot.next_move(&me, &board), Displacement::new(1, 0));
    assert_eq!(bot.memory().phase(), Phase::Idle);
}

#[test]
fn full_inventory_heads_home_ignoring_diamonds() {
    let me = me_at(Position::new(6, 6), 5);
    let board = board(
        10,
        10,
        &me,
        vec![
            GameObject::diamond(2, Position::new(6, 7), 1),
            GameObject::diamond(3, Position::new(7, 6), 2),
        ],
    );
    let mut bot = GreedyBot::default();

    assert_eq!(bot.next_move(&me, &board), Displacement::WEST);
    assert_eq!(bot.memory().queue(), &[BASE]);
    assert!(bot.memory().is_returning_to(BASE));
}

#[test]
fn diamond_choice_weighs_points_against_distance() {
    let me = me_at(Position::new(5, 5), 0);
    let board = board(
        15,
        15,
        &me,
        vec![
            GameObject::diamond(2, Position::new(8, 5), 1),
            GameObject::diamond(3, Position::new(5, 11), 3),
        ],
    );
    let config = BotConfig::default();

    let plan = direct_or_relay_diamond(&TurnContext::new(&me, &board, &config)).unwrap();
    assert_eq!(plan.waypoints, [Position::new(5, 11)]);
}

#[test]
fn teleporter_on_the_naive_step_is_sidestepped() {
    let mut world = World::new(
        10,
        10,
        me_at(Position::new(3, 3), 0),
        vec![
            GameObject::diamond(2, Position::new(6, 3), 1),
            GameObject::teleporter(3, Position::new(4, 3), "a"),
            GameObject::teleporter(4, Position::new(9, 9), "a"),
        ],
    );
    let mut bot = GreedyBot::default();

    assert_eq!(world.turn(&mut bot), Displacement::NORTH);
    assert_eq!(bot.memory().head(), Some(Position::new(6, 3)));
    assert_eq!(world.me.position, Position::new(3, 4));

    // Detour reached: resume toward the diamond from the new row.
    assert_eq!(world.turn(&mut bot), Displacement::EAST);
    assert_eq!(bot.memory().detour(), None);
    assert_eq!(world.me.position, Position::new(4, 4));
}

#[test]
fn loaded_rival_becomes_the_target() {
    let me = me_at(Position::new(4, 4), 1);
    let rival = GameObject::bot(2, Position::new(5, 5), Position::new(9, 9), 3, 60_000);
    let board = board(10, 10, &me, vec![rival]);
    let mut bot = GreedyBot::default();

    assert_eq!(bot.next_move(&me, &board), Displacement::EAST);
    assert_eq!(bot.memory().queue(), &[Position::new(5, 5)]);
}

#[test]
fn returns_home_through_teleporter() {
    let mut world = World::new(
        20,
        20,
        me_at(Position::new(17, 18), 5),
        vec![
            GameObject::teleporter(2, Position::new(18, 18), "t"),
            GameObject::teleporter(3, Position::new(1, 0), "t"),
        ],
    );
    let mut bot = GreedyBot::default();

    assert_eq!(world.turn(&mut bot), Displacement::EAST);
    assert_eq!(bot.memory().relay().map(|t| t.id), Some(ObjectId(2)));
    assert_eq!(world.me.position, Position::new(1, 0));

    assert_eq!(world.turn(&mut bot), Displacement::WEST);
    assert_eq!(bot.memory().relay(), None);
    assert_eq!(bot.memory().queue(), &[BASE]);
    assert_eq!(world.me.position, BASE);
    assert_eq!(world.me.diamonds_held(), 0);

    // Arriving at base wipes the objective.
    world.turn(&mut bot);
    assert_eq!(bot.memory().head(), None);
}

#[test]
fn full_bot_standing_on_a_teleporter_still_heads_home() {
    let mut world = World::new(
        20,
        20,
        me_at(Position::new(10, 10), 5),
        vec![
            GameObject::teleporter(2, Position::new(10, 10), "t"),
            GameObject::teleporter(3, Position::new(1, 0), "t"),
        ],
    );
    let mut bot = GreedyBot::default();

    assert_eq!(world.turn(&mut bot), Displacement::WEST);
    assert_eq!(bot.memory().queue(), &[BASE]);

    // One step off the pad, the pad becomes the shortcut home.
    assert_eq!(world.turn(&mut bot), Displacement::EAST);
    assert_eq!(world.me.position, Position::new(1, 0));

    assert_eq!(world.turn(&mut bot), Displacement::WEST);
    assert_eq!(world.me.position, BASE);
    assert_eq!(world.me.diamonds_held(), 0);
}

#[test]
fn sweeps_a_cluster_then_returns_early() {
    let mut world = World::new(
        9,
        9,
        me_at(BASE, 0),
        vec![
            GameObject::diamond(2, Position::new(1, 1), 1),
            GameObject::diamond(3, Position::new(8, 8), 1),
            GameObject::diamond(4, Position::new(6, 6), 1),
            GameObject::diamond(5, Position::new(7, 6), 1),
        ],
    );
    let mut bot = GreedyBot::default();

    world.turn(&mut bot);
    assert_eq!(bot.memory().last_goal_distance(), Some(12));

    let mut turns = 1;
    while world.collected.len() < 3 {
        world.turn(&mut bot);
        turns += 1;
        assert!(turns < 40, "sweep did not finish");
    }
    assert_eq!(
        world.collected,
        [Position::new(6, 6), Position::new(7, 6), Position::new(8, 8)]
    );
    assert_eq!(world.me.diamonds_held(), 3);

    // Next objective is the lone diamond at (1, 1), 14 steps away. Once the
    // base is closer than three quarters of that, the bot banks instead.
    world.turn(&mut bot);
    assert_eq!(bot.memory().head(), Some(Position::new(1, 1)));
    assert_eq!(bot.memory().last_goal_distance(), Some(14));

    while !bot.memory().is_returning_to(BASE) {
        world.turn(&mut bot);
        turns += 1;
        assert!(turns < 60, "never turned home");
    }
    assert_eq!(world.me.position, Position::new(1, 8));
    assert_eq!(world.collected.len(), 3);
}

#[test]
fn bots_keep_separate_memories() {
    let first = me_at(Position::new(2, 2), 0);
    let second = GameObject::bot(7, Position::new(8, 8), Position::new(9, 9), 0, 60_000);
    let board = board(
        10,
        10,
        &first,
        vec![second.clone(), GameObject::diamond(3, Position::new(2, 4), 1)],
    );

    let mut a = GreedyBot::default();
    let mut b = GreedyBot::default();

    a.next_move(&first, &board);
    assert_eq!(a.memory().head(), Some(Position::new(2, 4)));
    assert!(b.memory().is_idle());

    b.next_move(&second, &board);
    assert_eq!(b.memory().head(), Some(Position::new(2, 4)));
    assert_eq!(a.memory().last_goal_distance(), Some(2));
    assert_eq!(b.memory().last_goal_distance(), Some(10));
}

#[test]
fn drives_a_bot_from_a_json_snapshot() {
    let json = r#"{
        "width": 5,
        "height": 5,
        "gameObjects": [
            {
                "id": 1,
                "position": { "x": 0, "y": 0 },
                "type": "BotGameObject",
                "properties": {
                    "diamonds": 0,
                    "base": { "x": 0, "y": 0 },
                    "millisecondsLeft": 60000
                }
            },
            {
                "id": 2,
                "position": { "x": 0, "y": 3 },
                "type": "DiamondGameObject",
                "properties": { "points": 1 }
            }
        ]
    }"#;
    let board = Board::try_from(BoardSnapshot::from_json(json).unwrap()).unwrap();
    let mut bot = GreedyBot::default();

    assert_eq!(bot.next_move_for(ME, &board), Ok(Displacement::NORTH));
}
