//! Equality Contract Integration Tests
//!
//! Every entity compares over its declared field list only: two instances
//! built from the same arguments are equal and share a hash, flipping one
//! declared field breaks equality, and undeclared fields (ids, timestamps,
//! counters) never participate.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use anyhow::Result;
use cmskit::{
    Article, Category, Comment, Country, File, Item, Person, PollOption, Profile, Rating,
    Setting, Subscription, Video, WebLink,
};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn assert_equal_pair<T: PartialEq + Hash + std::fmt::Debug>(a: &T, b: &T) {
    assert_eq!(a, b);
    assert_eq!(hash_of(a), hash_of(b));
}

#[test]
fn same_arguments_mean_equal_and_same_hash() -> Result<()> {
    assert_equal_pair(&Item::new("en", "Title")?, &Item::new("en", "Title")?);
    assert_equal_pair(
        &Article::new("en", "Headline")?,
        &Article::new("en", "Headline")?,
    );
    assert_equal_pair(&Category::new("en", "News")?, &Category::new("en", "News")?);
    assert_equal_pair(&Person::new("Jan", "Doe")?, &Person::new("Jan", "Doe")?);
    assert_equal_pair(&Country::new("Norway", "NO")?, &Country::new("Norway", "NO")?);
    assert_equal_pair(&Profile::default(), &Profile::default());
    assert_equal_pair(&Rating::default(), &Rating::default());
    assert_equal_pair(&Setting::new("theme")?, &Setting::new("theme")?);
    Ok(())
}

#[test]
fn flipping_each_declared_field_breaks_equality() -> Result<()> {
    // Item: name and language are declared
    let base = Item::new("en", "Title")?;
    let mut other = Item::new("en", "Title")?;
    other.set_name("Other")?;
    assert_ne!(base, other);
    assert_ne!(hash_of(&base), hash_of(&other));

    let mut other = Item::new("en", "Title")?;
    other.set_language("de")?;
    assert_ne!(base, other);

    // Article: the embedded item and category are declared
    let base = Article::new("en", "Headline")?;
    let mut other = Article::new("en", "Headline")?;
    other.category = Some(Category::new("en", "News")?);
    assert_ne!(base, other);

    // Person: email is declared alongside the names
    let base = Person::new("Jan", "Doe")?;
    let mut other = Person::new("Jan", "Doe")?;
    other.email = Some("jan@example.com".into());
    assert_ne!(base, other);

    // Country: iso code is declared
    let base = Country::new("Norway", "NO")?;
    let mut other = Country::new("Norway", "NO")?;
    other.set_iso_code("SE")?;
    assert_ne!(base, other);
    Ok(())
}

#[test]
fn undeclared_fields_do_not_participate() -> Result<()> {
    // id and timestamps are never declared
    let base = Item::new("en", "Title")?;
    let mut other = Item::new("en", "Title")?;
    other.id = 99;
    other.author_id = 3;
    other.created = other.created - chrono::Duration::hours(5);
    assert_equal_pair(&base, &other);

    // vote counters are not declared on poll options
    let base = PollOption::new("Yes")?;
    let mut other = PollOption::new("Yes")?;
    other.votes = 100;
    assert_equal_pair(&base, &other);

    // subscriptions compare by email only
    let base = Subscription::new("a@example.com")?;
    let mut other = Subscription::new("a@example.com")?;
    other.active = false;
    other.id = 12;
    assert_equal_pair(&base, &other);

    // a file's original name and raw payload are not declared; size is
    let base = File::new("text/plain", "a.txt", "upload-a.txt", vec![1, 2, 3])?;
    let other = File::new("text/plain", "a.txt", "upload-b.txt", vec![9, 9, 9])?;
    assert_equal_pair(&base, &other);
    Ok(())
}

#[test]
fn deep_equality_reaches_nested_entities() -> Result<()> {
    let mut a = Article::new("en", "Headline")?;
    let mut b = Article::new("en", "Headline")?;

    let mut parent = Category::new("en", "Root")?;
    parent.id = 77; // undeclared on Category
    let mut leaf_a = Category::new("en", "News")?;
    leaf_a.parent = Some(Box::new(parent.clone()));
    let mut leaf_b = Category::new("en", "News")?;
    leaf_b.parent = Some(Box::new(Category::new("en", "Root")?));

    a.category = Some(leaf_a);
    b.category = Some(leaf_b);
    // parent ids differ but ids are undeclared, so the chains compare equal
    assert_equal_pair(&a, &b);

    b.category.as_mut().unwrap().parent = None;
    assert_ne!(a, b);
    Ok(())
}

#[test]
fn natural_ordering_matches_the_documented_keys() -> Result<()> {
    use std::cmp::Ordering;

    // by name, case-insensitive
    let a = Item::new("en", "alpha")?;
    let b = Item::new("en", "BETA")?;
    assert_eq!(a.natural_cmp(&b), Ordering::Less);
    assert_eq!(b.natural_cmp(&a), Ordering::Greater);

    // by value
    assert_eq!(Rating::new(1).natural_cmp(&Rating::new(2)), Ordering::Less);

    // by creation time
    let older = Comment::new("a", "t")?;
    let mut newer = Comment::new("a", "t")?;
    newer.created = older.created + chrono::Duration::seconds(30);
    assert_eq!(older.natural_cmp(&newer), Ordering::Less);

    // equal arguments compare equal
    let a = Video::new("en", "Clip")?;
    let b = Video::new("en", "Clip")?;
    assert_eq!(a.natural_cmp(&b), Ordering::Equal);

    // weblink ordering ignores the url
    let a = WebLink::new("en", "Site", "https://a.example")?;
    let b = WebLink::new("en", "Site", "https://b.example")?;
    assert_eq!(a.natural_cmp(&b), Ordering::Equal);
    Ok(())
}
