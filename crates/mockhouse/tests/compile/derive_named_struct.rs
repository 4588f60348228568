use mockhouse::prelude::*;

#[derive(Debug, Default, ScanRow)]
struct User {
    name: String,
    age: u8,
    #[scan(skip)]
    token: String,
}

fn main() {
    let client = MockClient::new().with_rows(Rows::new(table![["ada", 36u8, "opaque"]]));
    let mut rows = client.query("SELECT name, age, token FROM users", &[]).unwrap();

    let mut user = User::default();
    while rows.next() {
        rows.scan_struct(&mut user).unwrap();
    }

    assert_eq!(user.name, "ada");
    assert_eq!(user.age, 36);
    assert!(user.token.is_empty());
}
