use rand::Rng;

/// Running minimum over candidate walls.
///
/// A strictly cheaper candidate always wins. An equally cheap one takes over
/// on a coin flip made against the current best only, so with three or more
/// ties the later ones are favoured over a uniform pick.
pub struct Cheapest<T> {
    best: Option<(u8, T)>,
}

impl<T> Cheapest<T> {
    pub fn new() -> Self {
        Self { best: None }
    }

    pub fn offer<R: Rng + ?Sized>(&mut self, weight: u8, candidate: T, rng: &mut R) {
        let replace = match &self.best {
            None => true,
            Some((best, _)) if weight < *best => true,
            Some((best, _)) if weight == *best => rng.random_bool(0.5),
            Some(_) => false,
        };

        if replace {
            self.best = Some((weight, candidate));
        }
    }

    pub fn into_inner(self) -> Option<T> {
        self.best.map(|(_, candidate)| candidate)
    }
}
