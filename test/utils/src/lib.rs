/// Three session records as the authority serializes them, newest first.
/// The middle record is starred and level2; the oldest is analysis-only.
pub fn sessions_fixture() -> &'static str {
    return r#"[
  {
    "_id": "6603e2b41f29aa0001b7c101",
    "user_id": "65e8c1b20000000000000001",
    "name": "Session · 27 Mar 2024, 14:02",
    "original_code": "total = 0\nfor i in range(10):\n    total += i",
    "optimized_code": "total = sum(range(10))",
    "level": "level1",
    "changes": ["Replaced accumulation loop with sum()"],
    "original_analysis": {"time_complexity": "O(n)", "loop_depth": 1},
    "optimized_analysis": {"time_complexity": "O(n)", "loop_depth": 0},
    "error": null,
    "starred": false,
    "created_at": "2024-03-27T14:02:11.482910"
  },
  {
    "_id": "65fd9a2c1f29aa0001b7c0aa",
    "user_id": "65e8c1b20000000000000001",
    "name": "Fibonacci cleanup",
    "original_code": "def fib(n):\n    if n < 2:\n        return n\n    return fib(n - 1) + fib(n - 2)",
    "optimized_code": "def fib(n):\n    a, b = 0, 1\n    for _ in range(n):\n        a, b = b, a + b\n    return a",
    "level": "level2",
    "changes": ["Hoisted invariant computation", "Collapsed nested loops"],
    "original_analysis": {"time_complexity": "O(2^n)"},
    "optimized_analysis": {"time_complexity": "O(n)"},
    "error": null,
    "starred": true,
    "created_at": "2024-03-22T09:48:02.117204"
  },
  {
    "_id": "65f02d811f29aa0001b7c012",
    "user_id": "65e8c1b20000000000000001",
    "name": "Session · 12 Mar 2024, 09:15",
    "original_code": "print('hello')",
    "optimized_code": "print('hello')",
    "level": "none",
    "changes": [],
    "original_analysis": null,
    "optimized_analysis": null,
    "error": null,
    "starred": false,
    "created_at": "2024-03-12T09:15:44.902318"
  }
]"#;
}

/// A blocking raw report carrying every section at once.
pub fn raw_report_fixture() -> &'static str {
    return r#"{
  "language_check": {"accepted": false, "reason": "Only Python source is supported"},
  "syntax_error": "SyntaxError: expected ':' on line 7",
  "security_issues": ["Use of os.system() detected on line 12"],
  "runtime_risks": ["Possible infinite loop near line 4"],
  "optimization_findings": [
    {"category": "nested-loop", "line": 22, "suggestion": "Collapse the doubly nested scan"},
    {"category": "large-function", "line": "8-64", "suggestion": "Function main spans 56 lines"}
  ],
  "aborted": "Analysis stopped before optimization"
}"#;
}

/// A successful analyse response whose run was auto-saved by the
/// authority.
pub fn analyse_fixture() -> &'static str {
    return r#"{
  "passed_error_check": true,
  "original_code": "total = 0\nfor i in range(10):\n    total += i",
  "optimized_code": "total = sum(range(10))",
  "changes": ["Replaced accumulation loop with sum()"],
  "error_report": {
    "language_check": {"accepted": true, "reason": "Python source detected"},
    "syntax_error": "OK",
    "security_issues": [],
    "runtime_risks": [],
    "optimization_findings": [],
    "aborted": null
  },
  "session": {
    "_id": "6610aa031f29aa0001b7c1f0",
    "user_id": "65e8c1b20000000000000001",
    "name": "Session · 05 Apr 2024, 16:20",
    "original_code": "total = 0\nfor i in range(10):\n    total += i",
    "optimized_code": "total = sum(range(10))",
    "level": "level1",
    "changes": ["Replaced accumulation loop with sum()"],
    "original_analysis": {"time_complexity": "O(n)"},
    "optimized_analysis": {"time_complexity": "O(n)"},
    "error": null,
    "starred": false,
    "created_at": "2024-04-05T16:20:37.551271"
  },
  "error": null
}"#;
}
