use crate::vector::Vector;

/// Renders components as a list, keeping only the first `max_components`
/// and marking the rest with `...`.
///
/// ```
/// use ndvector::utils::abbreviate_components;
///
/// assert_eq!(abbreviate_components([1.0, 2.0, 3.0], 2), "[1.0, 2.0, ...]");
/// ```
pub fn abbreviate_components<I>(components: I, max_components: usize) -> String
where
    I: IntoIterator<Item = f64>,
{
    let mut components = components.into_iter();
    let mut rendered: Vec<String> = components
        .by_ref()
        .take(max_components)
        .map(|x| format!("{:?}", x))
        .collect();

    if components.next().is_some() {
        rendered.push("...".to_string());
    }

    format!("[{}]", rendered.join(", "))
}

pub fn generate_random_vectors(dim: usize, num: usize) -> Vec<Vector> {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    (0..num)
        .map(|_| (0..dim).map(|_| rng.gen_range(-1.0..1.0)).collect())
        .collect()
}
