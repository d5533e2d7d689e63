//! Bundled sample snippets

/// Demo input: a login helper with branching, a loop, `eval` and a
/// hardcoded key.
pub const DEMO_SNIPPET: &str = r#"import os

def database_connect(user, password):
    # This is a dummy function to test the scanner
    api_key = "12345-SECRET"  # Hardcoded secret check
    
    if user == "admin":
        cmd = f"echo Hello {user}"
        eval(cmd)  # Dangerous eval check
        return True
    elif user == "guest":
        return False
    else:
        # Complex nested logic to test Complexity score
        for i in range(10):
            if i % 2 == 0:
                print("Even")
            else:
                print("Odd")
        return None
"#;
