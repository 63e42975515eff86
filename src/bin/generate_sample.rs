use csv::Writer;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let students = [
        "Alice", "Bob", "Carol", "Dave", "Erin", "Frank", "Grace", "Heidi",
    ];
    let assignments = 10;

    let output_path = "grades.csv";
    let mut writer = Writer::from_path(output_path).expect("Failed to create output file");

    // First record: the roster. Every following record is one student's
    // grade vector.
    writer
        .write_record(students)
        .expect("Failed to write roster");

    for (i, _) in students.iter().enumerate() {
        // Spread per-student ability across 65–95 so averages do not cluster.
        let ability = 65.0 + 30.0 * i as f64 / (students.len() - 1) as f64;
        let row: Vec<String> = (0..assignments)
            .map(|_| {
                let grade = (ability + rng.gauss(0.0, 8.0)).clamp(0.0, 100.0);
                format!("{grade:.1}")
            })
            .collect();
        writer.write_record(&row).expect("Failed to write grade row");
    }

    writer.flush().expect("Failed to flush output file");

    println!(
        "Wrote {} students x {assignments} assignments to {output_path}",
        students.len()
    );
}
