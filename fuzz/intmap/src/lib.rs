use arbitrary::Arbitrary;
use intmap::IntervalMap;

/// Keys are bytes so the whole key space can be checked densely
type Map = IntervalMap<i8, u8>;

/// Values are folded into a small alphabet so neighboring intervals merge
/// often
const ALPHABET: u8 = 4;

#[derive(Debug, Clone, Copy, Arbitrary)]
pub struct Assign {
    begin: i8,
    end: i8,
    value: u8,
}

#[derive(Debug, Clone, Arbitrary)]
pub struct Input {
    default_value: u8,
    steps: Vec<Assign>,
}

struct Model([u8; 256]);

impl Model {
    fn new(default_value: u8) -> Self { Self([default_value; 256]) }

    #[inline]
    fn index(key: i8) -> usize { usize::from(key as u8 ^ 0x80) }

    fn assign(&mut self, Assign { begin, end, value }: Assign) {
        for key in begin..end {
            self.0[Self::index(key)] = value;
        }
    }

    fn assert_matches(&self, map: &Map) {
        for key in i8::MIN..=i8::MAX {
            assert_eq!(
                *map.value_at(&key),
                self.0[Self::index(key)],
                "Mismatch at {key} for {map:?}"
            );

            let (piece, value) = map.interval_at(&key);
            assert!(piece.contains(&key), "{piece:?} does not contain {key}");
            assert_eq!(*value, self.0[Self::index(key)]);
        }
    }
}

#[cfg(not(feature = "trace"))]
fn init_tracing() {}

#[cfg(feature = "trace")]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .with_writer(std::io::stderr)
        .try_init();
}

impl Input {
    pub fn run(&self) {
        init_tracing();

        let default_value = self.default_value % ALPHABET;
        let mut map = Map::new(default_value);
        let mut model = Model::new(default_value);

        for &step in &self.steps {
            let step = Assign {
                value: step.value % ALPHABET,
                ..step
            };

            let before = map.clone();
            map.assign(step.begin, step.end, step.value);
            model.assign(step);

            map.check_canonical().unwrap();
            model.assert_matches(&map);

            if step.begin >= step.end {
                assert_eq!(map, before);
            }
        }
    }
}
