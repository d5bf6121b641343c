//! Approximate string matching, used to map loosely typed names onto a known list.
//!
//! Scores are integers from 0 to 100, where 100 means the two (processed) strings are identical.
//! The score is the normalised insertion/deletion similarity: twice the length of the longest
//! common subsequence divided by the total length of both strings.


/// Normalise a string before comparison.
/// * Non-ASCII characters are dropped.
/// * Any other character that is not a letter or digit becomes a space.
/// * Letters are lower cased, and the result is trimmed.
pub fn process(s:&str) -> String {
    let res : String = s.chars().filter(|c|c.is_ascii()).map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { ' ' }).collect();
    res.trim().to_string()
}

/// Length of the longest common subsequence of two character sequences.
fn longest_common_subsequence(a:&[char],b:&[char]) -> usize {
    let mut previous = vec![0usize;b.len()+1];
    let mut current = vec![0usize;b.len()+1];
    for &ca in a {
        for (j,&cb) in b.iter().enumerate() {
            current[j+1] = if ca==cb { previous[j]+1 } else { current[j].max(previous[j+1]) };
        }
        std::mem::swap(&mut previous,&mut current);
    }
    previous[b.len()]
}

/// Similarity of two strings, 0 to 100. The strings are compared as given; see [process].
/// If either string is empty the score is 0. Only equal strings score 100.
pub fn ratio(a:&str,b:&str) -> u8 {
    if a==b && !a.is_empty() { return 100; }
    let a : Vec<char> = a.chars().collect();
    let b : Vec<char> = b.chars().collect();
    let total = a.len()+b.len();
    if a.is_empty() || b.is_empty() { return 0; }
    let common = longest_common_subsequence(&a,&b);
    // round half up of 100*2*common/total, in integers.
    // long, nearly equal strings would otherwise round up to 100.
    ((200*common+total/2)/total).min(99) as u8
}

/// The best choice found by [extract_one].
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct Match {
    /// position of the choice in the iterator given to [extract_one]
    pub index : usize,
    pub score : u8,
}

/// Find the choice most similar to the query. Both query and choices are passed through [process] first.
/// When several choices have the same best score, the first one wins.
/// Returns None only if there are no choices.
pub fn extract_one<'a>(query:&str,choices:impl IntoIterator<Item=&'a str>) -> Option<Match> {
    let query = process(query);
    let mut best : Option<Match> = None;
    for (index,choice) in choices.into_iter().enumerate() {
        let score = ratio(&query,&process(choice));
        if best.map(|b|score>b.score).unwrap_or(true) {
            best = Some(Match{index,score});
        }
    }
    best
}
