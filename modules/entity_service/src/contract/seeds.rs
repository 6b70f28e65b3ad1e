//! Seed payloads baked into the binary
//!
//! Each payload is a base64-encoded JSON array of entity objects, in the
//! same shape as the files read from a collection's seed directory.

pub const ACCOUNTS: &str = "IFsKCXsKCQkiSWQiOiAiNTg0MDU3MThmOTRjNjcxYjA1MzUwODU3IiwKCQkiQWNjb3VudE5hbWUiOiAiTXkgQ29tcGFueSIsCgkJIkFkZHJlc3MxIjogIk15IENvbXBhbnkgRHJpdmUiLAoJCSJBZGRyZXNzMiIgOiAiIiwKCQkiUmVnaW9uIjogIlVua25vd24iLAoJCSJJc1N5c3RlbUFjY291bnQiOiB0cnVlLAoJCSJJc0RlZmF1bHRBY2NvdW50IjogdHJ1ZSwKCQkiQ2l0eSI6ICJVbmtub3duIiwKCQkiUG9zdENvZGUiOiIwMDAwMCIsCgkJIkNvdW50cnlJZCI6IjU3ZmU1OTM2ZWQwNzI3ZDg5NDA2ZDA1OCIsCgkJIlByaW1hcnlQaG9uZSI6IHsKCQkJIlZhbHVlIjogIisxIDAwMC0wMDAtMDAwIiwKCQkJIk51bWVyaWMiOiAiMTAwMDAwMDAwMCIsCgkJCSJEaWFsQ29kZSI6ICIxIiwKCQkJIkNvdW50cnlJU08iOiAidXMiCgkJfSwKCQkiU2Vjb25kYXJ5UGhvbmUiOiB7CgkJCSJWYWx1ZSI6ICIrMSAwMDAtMDAwLTAwMCIsCgkJCSJOdW1lcmljIjogIjEwMDAwMDAwMDAiLAoJCQkiRGlhbENvZGUiOiAiMSIsCgkJCSJDb3VudHJ5SVNPIjogInVzIgoJCX0sCgkJIkVtYWlsIjoicm9vdEByb290LWNvbXBhbnkuY29tIiwKCQkiQmlsbGluZ0luZm8iOgoJCXsKCQkJIlZhdWx0UmVmSWQiOiIiCgkJfSwKCQkiQWNjb3VudFR5cGVTaG9ydCI6IiIsCgkJIkFjY291bnRUeXBlTG9uZyI6IiIsCgkJIkRpc2FibGVkRmVhdHVyZXMiOltdLAoJCSJSZWxhdGVkQWNjdElkIjoiIiwKCQkiQ3JlYXRlRGF0ZSI6IjIwMTYtMDgtMjZUMTA6NDk6MDQuNjMwNTM2NDQ2LTA0OjAwIiwKCQkiVXBkYXRlRGF0ZSI6IjIwMTYtMDgtMjZUMTA6NDk6MDQuNjMwNTM2NDQ2LTA0OjAwIiwKCQkiQm9vdHN0cmFwTWV0YSI6IHsKCQl9Cgl9Cl0K";

pub const ACCOUNT_ROLES: &str = "WwoJewoJCSJJZCI6IjU4NDE5YWU2YWI1YjZmM2RkNTM3NzI3MiIsCgkJIkFjY291bnRJZCI6IjU4NDA1NzE4Zjk0YzY3MWIwNTM1MDg1NyIsCgkJIlVzZXJJZCI6IjU4NDA1Yjc5Zjk0YzY3MWIwNTM1MDg1OCIsCgkJIlJvbGVJZCI6IjU3YzA3ZWYzZGNiYTBmN2EwYmUzMzhiOCIsCgkJIkxhc3RVcGRhdGVJZCI6IjU4NDA1Yjc5Zjk0YzY3MWIwNTM1MDg1OCIsCgkJIkJvb3RzdHJhcE1ldGEiOiB7CgkJCSJBbHdheXNVcGRhdGUiOnRydWUKCQl9Cgl9Cl0K";

pub const FEATURES: &str = "WwoJewoJCSJJZCI6ICI1ODAzYzRhM2FiODM5MGY3ZTBhN2JjYzQiLAoJCSJLZXkiOiAiQUNDT1VOVF9BREQiLAoJCSJOYW1lIjogIkFkZCBBY2NvdW50IiwKCQkiRGVzY3JpcHRpb24iOiAiQWJpbGl0eSB0byBhZGQgYSBuZXcgYWNjb3VudCB0byB0aGUgc3lzdGVtLiIsCgkJIkZlYXR1cmVHcm91cElkIjogIjU4NDVjMmQ1MWQ0MWM4MGE0MDljY2UyYyIsCgkJIkNyZWF0ZURhdGUiOiAiMjAxNi0wOC0yNlQxMDo0OTowNC42My0wNDowMCIsCgkJIlVwZGF0ZURhdGUiOiAiMjAxNi0wOC0yNlQxMDo0OTowNC42My0wNDowMCIsCgkJIkxhc3RVcGRhdGVJZCI6ICI1N2Q5YjM4M2RjYmEwZjUxMTcyZjFmNTciLAoJCSJCb290c3RyYXBNZXRhIjogewoJCQkiVmVyc2lvbiI6IDAsCgkJCSJEb21haW4iOiAiIiwKCQkJIlJlbGVhc2VNb2RlIjogIiIsCgkJCSJQcm9kdWN0TmFtZSI6ICIiLAoJCQkiRG9tYWlucyI6IG51bGwsCgkJCSJQcm9kdWN0TmFtZXMiOiBudWxsLAoJCQkiRGVsZXRlUm93IjogZmFsc2UsCgkJCSJBbHdheXNVcGRhdGUiOiB0cnVlCgkJfSwKCQkiRXJyb3JzIjogewoJCQkiSWQiOiAiIiwKCQkJIktleSI6ICIiLAoJCQkiTmFtZSI6ICIiLAoJCQkiRGVzY3JpcHRpb24iOiAiIiwKCQkJIkZlYXR1cmVHcm91cElkIjogIiIKCQl9LAoJCSJWaWV3cyI6IHsKCQkJIlVwZGF0ZURhdGUiOiAiIiwKCQkJIlVwZGF0ZUZyb21Ob3ciOiAiIgoJCX0sCgkJIkpvaW5zIjoge30KCX0sCgl7CgkJIklkIjogIjU4MDQyNzAxZDExMzBkZmMzNDAyYzM1YiIsCgkJIktleSI6ICJBQ0NPVU5UX1ZJRVciLAoJCSJOYW1lIjogIlZpZXcgQWNjb3VudHMiLAoJCSJEZXNjcmlwdGlvbiI6ICJBYmlsaXR5IHRvIHZpZXcgYWNjb3VudHMuIiwKCQkiRmVhdHVyZUdyb3VwSWQiOiAiNTg0NWMyZDUxZDQxYzgwYTQwOWNjZTJjIiwKCQkiQ3JlYXRlRGF0ZSI6ICIyMDE2LTA4LTI2VDEwOjQ5OjA0LjYzLTA0OjAwIiwKCQkiVXBkYXRlRGF0ZSI6ICIyMDE2LTEyLTA1VDE3OjE5OjQzLjM0MS0wNTowMCIsCgkJIkxhc3RVcGRhdGVJZCI6ICI1N2Q5YjM4M2RjYmEwZjUxMTcyZjFmNTciLAoJCSJCb290c3RyYXBNZXRhIjogewoJCQkiVmVyc2lvbiI6IDAsCgkJCSJEb21haW4iOiAiIiwKCQkJIlJlbGVhc2VNb2RlIjogIiIsCgkJCSJQcm9kdWN0TmFtZSI6ICIiLAoJCQkiRG9tYWlucyI6IG51bGwsCgkJCSJQcm9kdWN0TmFtZXMiOiBudWxsLAoJCQkiRGVsZXRlUm93IjogZmFsc2UsCgkJCSJBbHdheXNVcGRhdGUiOiB0cnVlCgkJfSwKCQkiRXJyb3JzIjogewoJCQkiSWQiOiAiIiwKCQkJIktleSI6ICIiLAoJCQkiTmFtZSI6ICIiLAoJCQkiRGVzY3JpcHRpb24iOiAiIiwKCQkJIkZlYXR1cmVHcm91cElkIjogIiIKCQl9LAoJCSJWaWV3cyI6IHsKCQkJIlVwZGF0ZURhdGUiOiAiIiwKCQkJIlVwZGF0ZUZyb21Ob3ciOiAiIgoJCX0sCgkJIkpvaW5zIjoge30KCX0sCgl7CgkJIklkIjogIjU4NDVkZDhlMWQ0MWM4NjE5MjA4NjA0MSIsCgkJIktleSI6ICJBQ0NPVU5UX01PRElGWSIsCgkJIk5hbWUiOiAiTW9kaWZ5IEFjY291bnRzIiwKCQkiRGVzY3JpcHRpb24iOiAiQWJpbGl0eSB0byBtb2RpZnkgYWNjb3VudHMiLAoJCSJGZWF0dXJlR3JvdXBJZCI6ICI1ODQ1YzJkNTFkNDFjODBhNDA5Y2NlMmMiLAoJCSJDcmVhdGVEYXRlIjogIjIwMTYtMTItMDVUMTY6MzU6MTAuMjE5LTA1OjAwIiwKCQkiVXBkYXRlRGF0ZSI6ICIyMDE2LTEyLTA1VDE2OjQ3OjMyLjY5LTA1OjAwIiwKCQkiTGFzdFVwZGF0ZUlkIjogIjU3ZDliMzgzZGNiYTBmNTExNzJmMWY1NyIsCgkJIkJvb3RzdHJhcE1ldGEiOiB7CgkJCSJWZXJzaW9uIjogMCwKCQkJIkRvbWFpbiI6ICIiLAoJCQkiUmVsZWFzZU1vZGUiOiAiIiwKCQkJIlByb2R1Y3ROYW1lIjogIiIsCgkJCSJEb21haW5zIjogbnVsbCwKCQkJIlByb2R1Y3ROYW1lcyI6IG51bGwsCgkJCSJEZWxldGVSb3ciOiBmYWxzZSwKCQkJIkFsd2F5c1VwZGF0ZSI6IHRydWUKCQl9LAoJCSJFcnJvcnMiOiB7CgkJCSJJZCI6ICIiLAoJCQkiS2V5IjogIiIsCgkJCSJOYW1lIjogIiIsCgkJCSJEZXNjcmlwdGlvbiI6ICIiLAoJCQkiRmVhdHVyZUdyb3VwSWQiOiAiIgoJCX0sCgkJIlZpZXdzIjogewoJCQkiVXBkYXRlRGF0ZSI6ICIiLAoJCQkiVXBkYXRlRnJvbU5vdyI6ICIiCgkJfSwKCQkiSm9pbnMiOiB7fQoJfSwKCXsKCQkiSWQiOiAiNTg0NWRkOGUxZDQxYzg2MTkyMDg2MDQyIiwKCQkiS2V5IjogIkFDQ09VTlRfREVMRVRFIiwKCQkiTmFtZSI6ICJEZWxldGUgQWNjb3VudHMiLAoJCSJEZXNjcmlwdGlvbiI6ICJBYmlsaXR5IHRvIGRlbGV0ZSBhY2NvdW50cyIsCgkJIkZlYXR1cmVHcm91cElkIjogIjU4NDVjMmQ1MWQ0MWM4MGE0MDljY2UyYyIsCgkJIkNyZWF0ZURhdGUiOiAiMjAxNi0xMi0wNVQxNjozNToxMC4yMTktMDU6MDAiLAoJCSJVcGRhdGVEYXRlIjogIjIwMTYtMTItMDVUMTc6Mjk6NTUuMjg0LTA1OjAwIiwKCQkiTGFzdFVwZGF0ZUlkIjogIjU3ZDliMzgzZGNiYTBmNTExNzJmMWY1NyIsCgkJIkJvb3RzdHJhcE1ldGEiOiB7CgkJCSJWZXJzaW9uIjogMCwKCQkJIkRvbWFpbiI6ICIiLAoJCQkiUmVsZWFzZU1vZGUiOiAiIiwKCQkJIlByb2R1Y3ROYW1lIjogIiIsCgkJCSJEb21haW5zIjogbnVsbCwKCQkJIlByb2R1Y3ROYW1lcyI6IG51bGwsCgkJCSJEZWxldGVSb3ciOiBmYWxzZSwKCQkJIkFsd2F5c1VwZGF0ZSI6IHRydWUKCQl9LAoJCSJFcnJvcnMiOiB7CgkJCSJJZCI6ICIiLAoJCQkiS2V5IjogIiIsCgkJCSJOYW1lIjogIiIsCgkJCSJEZXNjcmlwdGlvbiI6ICIiLAoJCQkiRmVhdHVyZUdyb3VwSWQiOiAiIgoJCX0sCgkJIlZpZXdzIjogewoJCQkiVXBkYXRlRGF0ZSI6ICIiLAoJCQkiVXBkYXRlRnJvbU5vdyI6ICIiCgkJfSwKCQkiSm9pbnMiOiB7fQoJfSwKCXsKCQkiSWQiOiAiNTg0NWRkOGUxZDQxYzg2MTkyMDg2MDQ0IiwKCQkiS2V5IjogIkFDQ09VTlRfRVhQT1JUIiwKCQkiTmFtZSI6ICJFeHBvcnQgQWNjb3VudHMiLAoJCSJEZXNjcmlwdGlvbiI6ICJBYmlsaXR5IHRvIGV4cG9ydCBhY2NvdW50cyIsCgkJIkZlYXR1cmVHcm91cElkIjogIjU4NDVjMmQ1MWQ0MWM4MGE0MDljY2UyYyIsCgkJIkNyZWF0ZURhdGUiOiAiMjAxNi0xMi0wNVQxNjozNToxMC4yMTktMDU6MDAiLAoJCSJVcGRhdGVEYXRlIjogIjIwMTYtMTItMDVUMTY6NDk6MzguMDk4LTA1OjAwIiwKCQkiTGFzdFVwZGF0ZUlkIjogIjU3ZDliMzgzZGNiYTBmNTExNzJmMWY1NyIsCgkJIkJvb3RzdHJhcE1ldGEiOiB7CgkJCSJWZXJzaW9uIjogMCwKCQkJIkRvbWFpbiI6ICIiLAoJCQkiUmVsZWFzZU1vZGUiOiAiIiwKCQkJIlByb2R1Y3ROYW1lIjogIiIsCgkJCSJEb21haW5zIjogbnVsbCwKCQkJIlByb2R1Y3ROYW1lcyI6IG51bGwsCgkJCSJEZWxldGVSb3ciOiBmYWxzZSwKCQkJIkFsd2F5c1VwZGF0ZSI6IHRydWUKCQl9LAoJCSJFcnJvcnMiOiB7CgkJCSJJZCI6ICIiLAoJCQkiS2V5IjogIiIsCgkJCSJOYW1lIjogIiIsCgkJCSJEZXNjcmlwdGlvbiI6ICIiLAoJCQkiRmVhdHVyZUdyb3VwSWQiOiAiIgoJCX0sCgkJIlZpZXdzIjogewoJCQkiVXBkYXRlRGF0ZSI6ICIiLAoJCQkiVXBkYXRlRnJvbU5vdyI6ICIiCgkJfSwKCQkiSm9pbnMiOiB7fQoJfSwKCXsKCQkiSWQiOiAiNTg0NzM3NmQxZDQxYzgzZWE3ZDJlYjQ3IiwKCQkiS2V5IjogIkFDQ09VTlRfSU5WSVRFIiwKCQkiTmFtZSI6ICJBY2NvdW50IEludml0ZSIsCgkJIkRlc2NyaXB0aW9uIjogIkludml0ZSBvdGhlcnMgdG8gdGhpcyBhY2NvdW50IiwKCQkiRmVhdHVyZUdyb3VwSWQiOiAiNTg0NWMyZDUxZDQxYzgwYTQwOWNjZTJjIiwKCQkiQ3JlYXRlRGF0ZSI6ICIyMDE2LTEyLTA2VDE3OjEwOjUzLjU2LTA1OjAwIiwKCQkiVXBkYXRlRGF0ZSI6ICIyMDE2LTEyLTA2VDE3OjEwOjUzLjU2LTA1OjAwIiwKCQkiTGFzdFVwZGF0ZUlkIjogIjU3ZDliMzgzZGNiYTBmNTExNzJmMWY1NyIsCgkJIkJvb3RzdHJhcE1ldGEiOiB7CgkJCSJWZXJzaW9uIjogMCwKCQkJIkRvbWFpbiI6ICIiLAoJCQkiUmVsZWFzZU1vZGUiOiAiIiwKCQkJIlByb2R1Y3ROYW1lIjogIiIsCgkJCSJEb21haW5zIjogbnVsbCwKCQkJIlByb2R1Y3ROYW1lcyI6IG51bGwsCgkJCSJEZWxldGVSb3ciOiBmYWxzZSwKCQkJIkFsd2F5c1VwZGF0ZSI6IHRydWUKCQl9LAoJCSJFcnJvcnMiOiB7CgkJCSJJZCI6ICIiLAoJCQkiS2V5IjogIiIsCgkJCSJOYW1lIjogIiIsCgkJCSJEZXNjcmlwdGlvbiI6ICIiLAoJCQkiRmVhdHVyZUdyb3VwSWQiOiAiIgoJCX0sCgkJIlZpZXdzIjogewoJCQkiVXBkYXRlRGF0ZSI6ICIiLAoJCQkiVXBkYXRlRnJvbU5vdyI6ICIiCgkJfSwKCQkiSm9pbnMiOiB7fQoJfSwKCXsKCQkiSWQiOiAiNTg0ODNlOGUxZDQxYzgzNWYzMzY4ZDYzIiwKCQkiS2V5IjogIlVTRVJfQUREIiwKCQkiTmFtZSI6ICJBZGQgdXNlciIsCgkJIkRlc2NyaXB0aW9uIjogIkFiaWxpdHkgdG8gYWRkIGEgbmV3ICB1c2VyLiIsCgkJIkZlYXR1cmVHcm91cElkIjogIjU4NDgzODhjMWQ0MWM4MjdiNGUxNGRkNiIsCgkJIkNyZWF0ZURhdGUiOiAiMjAxNi0xMi0wN1QxMTo1MzozNC4yMzQtMDU6MDAiLAoJCSJVcGRhdGVEYXRlIjogIjIwMTYtMTItMDdUMTE6NTM6MzQuMjM0LTA1OjAwIiwKCQkiTGFzdFVwZGF0ZUlkIjogIjU3ZDliMzgzZGNiYTBmNTExNzJmMWY1NyIsCgkJIkJvb3RzdHJhcE1ldGEiOiB7CgkJCSJWZXJzaW9uIjogMCwKCQkJIkRvbWFpbiI6ICIiLAoJCQkiUmVsZWFzZU1vZGUiOiAiIiwKCQkJIlByb2R1Y3ROYW1lIjogIiIsCgkJCSJEb21haW5zIjogbnVsbCwKCQkJIlByb2R1Y3ROYW1lcyI6IG51bGwsCgkJCSJEZWxldGVSb3ciOiBmYWxzZSwKCQkJIkFsd2F5c1VwZGF0ZSI6IHRydWUKCQl9LAoJCSJFcnJvcnMiOiB7CgkJCSJJZCI6ICIiLAoJCQkiS2V5IjogIiIsCgkJCSJOYW1lIjogIiIsCgkJCSJEZXNjcmlwdGlvbiI6ICIiLAoJCQkiRmVhdHVyZUdyb3VwSWQiOiAiIgoJCX0sCgkJIlZpZXdzIjogewoJCQkiVXBkYXRlRGF0ZSI6ICIiLAoJCQkiVXBkYXRlRnJvbU5vdyI6ICIiCgkJfSwKCQkiSm9pbnMiOiB7fQoJfSwKCXsKCQkiSWQiOiAiNTg0ODNlOGUxZDQxYzgzNWYzMzY4ZDY0IiwKCQkiS2V5IjogIlVTRVJfVklFVyIsCgkJIk5hbWUiOiAiVmlldyB1c2VycyIsCgkJIkRlc2NyaXB0aW9uIjogIkFiaWxpdHkgdG8gdmlldyAgdXNlcnMuIiwKCQkiRmVhdHVyZUdyb3VwSWQiOiAiNTg0ODM4OGMxZDQxYzgyN2I0ZTE0ZGQ2IiwKCQkiQ3JlYXRlRGF0ZSI6ICIyMDE2LTEyLTA3VDExOjUzOjM0LjIzNC0wNTowMCIsCgkJIlVwZGF0ZURhdGUiOiAiMjAxNi0xMi0wN1QxMTo1MzozNC4yMzQtMDU6MDAiLAoJCSJMYXN0VXBkYXRlSWQiOiAiNTdkOWIzODNkY2JhMGY1MTE3MmYxZjU3IiwKCQkiQm9vdHN0cmFwTWV0YSI6IHsKCQkJIlZlcnNpb24iOiAwLAoJCQkiRG9tYWluIjogIiIsCgkJCSJSZWxlYXNlTW9kZSI6ICIiLAoJCQkiUHJvZHVjdE5hbWUiOiAiIiwKCQkJIkRvbWFpbnMiOiBudWxsLAoJCQkiUHJvZHVjdE5hbWVzIjogbnVsbCwKCQkJIkRlbGV0ZVJvdyI6IGZhbHNlLAoJCQkiQWx3YXlzVXBkYXRlIjogdHJ1ZQoJCX0sCgkJIkVycm9ycyI6IHsKCQkJIklkIjogIiIsCgkJCSJLZXkiOiAiIiwKCQkJIk5hbWUiOiAiIiwKCQkJIkRlc2NyaXB0aW9uIjogIiIsCgkJCSJGZWF0dXJlR3JvdXBJZCI6ICIiCgkJfSwKCQkiVmlld3MiOiB7CgkJCSJVcGRhdGVEYXRlIjogIiIsCgkJCSJVcGRhdGVGcm9tTm93IjogIiIKCQl9LAoJCSJKb2lucyI6IHt9Cgl9LAoJewoJCSJJZCI6ICI1ODQ4M2U4ZTFkNDFjODM1ZjMzNjhkNjUiLAoJCSJLZXkiOiAiVVNFUl9NT0RJRlkiLAoJCSJOYW1lIjogIk1vZGlmeSB1c2VycyIsCgkJIkRlc2NyaXB0aW9uIjogIkFiaWxpdHkgdG8gbW9kaWZ5ICB1c2VycyIsCgkJIkZlYXR1cmVHcm91cElkIjogIjU4NDgzODhjMWQ0MWM4MjdiNGUxNGRkNiIsCgkJIkNyZWF0ZURhdGUiOiAiMjAxNi0xMi0wN1QxMTo1MzozNC4yMzQtMDU6MDAiLAoJCSJVcGRhdGVEYXRlIjogIjIwMTYtMTItMDdUMTE6NTM6MzQuMjM0LTA1OjAwIiwKCQkiTGFzdFVwZGF0ZUlkIjogIjU3ZDliMzgzZGNiYTBmNTExNzJmMWY1NyIsCgkJIkJvb3RzdHJhcE1ldGEiOiB7CgkJCSJWZXJzaW9uIjogMCwKCQkJIkRvbWFpbiI6ICIiLAoJCQkiUmVsZWFzZU1vZGUiOiAiIiwKCQkJIlByb2R1Y3ROYW1lIjogIiIsCgkJCSJEb21haW5zIjogbnVsbCwKCQkJIlByb2R1Y3ROYW1lcyI6IG51bGwsCgkJCSJEZWxldGVSb3ciOiBmYWxzZSwKCQkJIkFsd2F5c1VwZGF0ZSI6IHRydWUKCQl9LAoJCSJFcnJvcnMiOiB7CgkJCSJJZCI6ICIiLAoJCQkiS2V5IjogIiIsCgkJCSJOYW1lIjogIiIsCgkJCSJEZXNjcmlwdGlvbiI6ICIiLAoJCQkiRmVhdHVyZUdyb3VwSWQiOiAiIgoJCX0sCgkJIlZpZXdzIjogewoJCQkiVXBkYXRlRGF0ZSI6ICIiLAoJCQkiVXBkYXRlRnJvbU5vdyI6ICIiCgkJfSwKCQkiSm9pbnMiOiB7fQoJfSwKCXsKCQkiSWQiOiAiNTg0ODNlOGUxZDQxYzgzNWYzMzY4ZDY2IiwKCQkiS2V5IjogIlNFUlZFUl9TRVRUSU5HX01PRElGWSIsCgkJIk5hbWUiOiAiTW9kaWZ5IHNlcnZlciBzZXR0aW5ncyIsCgkJIkRlc2NyaXB0aW9uIjogIkFiaWxpdHkgdG8gbW9kaWZ5ICBzZXJ2ZXIgc2V0dGluZ3MiLAoJCSJGZWF0dXJlR3JvdXBJZCI6ICI1ODQ4Mzg4YzFkNDFjODI3YjRlMTRkZGQiLAoJCSJDcmVhdGVEYXRlIjogIjIwMTYtMTItMDdUMTE6NTM6MzQuMjM0LTA1OjAwIiwKCQkiVXBkYXRlRGF0ZSI6ICIyMDE2LTEyLTA3VDExOjU4OjQ4LjI5NS0wNTowMCIsCgkJIkxhc3RVcGRhdGVJZCI6ICI1N2Q5YjM4M2RjYmEwZjUxMTcyZjFmNTciLAoJCSJCb290c3RyYXBNZXRhIjogewoJCQkiVmVyc2lvbiI6IDAsCgkJCSJEb21haW4iOiAiIiwKCQkJIlJlbGVhc2VNb2RlIjogIiIsCgkJCSJQcm9kdWN0TmFtZSI6ICIiLAoJCQkiRG9tYWlucyI6IG51bGwsCgkJCSJQcm9kdWN0TmFtZXMiOiBudWxsLAoJCQkiRGVsZXRlUm93IjogZmFsc2UsCgkJCSJBbHdheXNVcGRhdGUiOiB0cnVlCgkJfSwKCQkiRXJyb3JzIjogewoJCQkiSWQiOiAiIiwKCQkJIktleSI6ICIiLAoJCQkiTmFtZSI6ICIiLAoJCQkiRGVzY3JpcHRpb24iOiAiIiwKCQkJIkZlYXR1cmVHcm91cElkIjogIiIKCQl9LAoJCSJWaWV3cyI6IHsKCQkJIlVwZGF0ZURhdGUiOiAiIiwKCQkJIlVwZGF0ZUZyb21Ob3ciOiAiIgoJCX0sCgkJIkpvaW5zIjoge30KCX0sCgl7CgkJIklkIjogIjU4NDg1NDE2MWQ0MWM4NmUzZjdlMWNhMCIsCgkJIktleSI6ICJVU0VSX0NIQU5HRV9ST0xFIiwKCQkiTmFtZSI6ICJDaGFuZ2UgYW55IHVzZXIgcm9sZSIsCgkJIkRlc2NyaXB0aW9uIjogIkFsbG93IHRoZSBhYmlsaXR5IHRvIGNoYW5nZSByb2xlcyBmb3IgYW55b25lIGluIHlvdXIgY29tcGFueSIsCgkJIkZlYXR1cmVHcm91cElkIjogIjU4NDgzODhjMWQ0MWM4MjdiNGUxNGRkNiIsCgkJIkNyZWF0ZURhdGUiOiAiMjAxNi0xMi0wN1QxMzoyNToyNi4zMTQtMDU6MDAiLAoJCSJVcGRhdGVEYXRlIjogIjIwMTYtMTItMDdUMTM6MjU6MjYuMzE0LTA1OjAwIiwKCQkiTGFzdFVwZGF0ZUlkIjogIjU3ZDliMzgzZGNiYTBmNTExNzJmMWY1NyIsCgkJIkJvb3RzdHJhcE1ldGEiOiB7CgkJCSJWZXJzaW9uIjogMCwKCQkJIkRvbWFpbiI6ICIiLAoJCQkiUmVsZWFzZU1vZGUiOiAiIiwKCQkJIlByb2R1Y3ROYW1lIjogIiIsCgkJCSJEb21haW5zIjogbnVsbCwKCQkJIlByb2R1Y3ROYW1lcyI6IG51bGwsCgkJCSJEZWxldGVSb3ciOiBmYWxzZSwKCQkJIkFsd2F5c1VwZGF0ZSI6IHRydWUKCQl9LAoJCSJFcnJvcnMiOiB7CgkJCSJJZCI6ICIiLAoJCQkiS2V5IjogIiIsCgkJCSJOYW1lIjogIiIsCgkJCSJEZXNjcmlwdGlvbiI6ICIiLAoJCQkiRmVhdHVyZUdyb3VwSWQiOiAiIgoJCX0sCgkJIlZpZXdzIjogewoJCQkiVXBkYXRlRGF0ZSI6ICIiLAoJCQkiVXBkYXRlRnJvbU5vdyI6ICIiCgkJfSwKCQkiSm9pbnMiOiB7fQoJfSwKCXsKCQkiSWQiOiAiNTg0OWFlNGYxZDQxYzg2YTgzZDZlZmI3IiwKCQkiS2V5IjogIlJPTEVfVklFVyIsCgkJIk5hbWUiOiAiVmlldyByb2xlcyIsCgkJIkRlc2NyaXB0aW9uIjogIkFiaWxpdHkgdG8gdmlldyByb2xlcyIsCgkJIkZlYXR1cmVHcm91cElkIjogIjU4NDlhZTRmMWQ0MWM4NmE4M2Q2ZWZiNiIsCgkJIkNyZWF0ZURhdGUiOiAiMjAxNi0xMi0wOFQxNDowMjozOS43NTEtMDU6MDAiLAoJCSJVcGRhdGVEYXRlIjogIjIwMTYtMTItMDhUMTQ6MDI6MzkuNzUxLTA1OjAwIiwKCQkiTGFzdFVwZGF0ZUlkIjogIjU3ZDliMzgzZGNiYTBmNTExNzJmMWY1NyIsCgkJIkJvb3RzdHJhcE1ldGEiOiB7CgkJCSJWZXJzaW9uIjogMCwKCQkJIkRvbWFpbiI6ICIiLAoJCQkiUmVsZWFzZU1vZGUiOiAiIiwKCQkJIlByb2R1Y3ROYW1lIjogIiIsCgkJCSJEb21haW5zIjogbnVsbCwKCQkJIlByb2R1Y3ROYW1lcyI6IG51bGwsCgkJCSJEZWxldGVSb3ciOiBmYWxzZSwKCQkJIkFsd2F5c1VwZGF0ZSI6IHRydWUKCQl9LAoJCSJFcnJvcnMiOiB7CgkJCSJJZCI6ICIiLAoJCQkiS2V5IjogIiIsCgkJCSJOYW1lIjogIiIsCgkJCSJEZXNjcmlwdGlvbiI6ICIiLAoJCQkiRmVhdHVyZUdyb3VwSWQiOiAiIgoJCX0sCgkJIlZpZXdzIjogewoJCQkiVXBkYXRlRGF0ZSI6ICIiLAoJCQkiVXBkYXRlRnJvbU5vdyI6ICIiCgkJfSwKCQkiSm9pbnMiOiB7fQoJfSwKCXsKCQkiSWQiOiAiNTg0OWFlNGYxZDQxYzg2YTgzZDZlZmI4IiwKCQkiS2V5IjogIlJPTEVfQUREIiwKCQkiTmFtZSI6ICJBZGQgcm9sZXMiLAoJCSJEZXNjcmlwdGlvbiI6ICJBYmlsaXR5IHRvIGFkZCByb2xlcyIsCgkJIkZlYXR1cmVHcm91cElkIjogIjU4NDlhZTRmMWQ0MWM4NmE4M2Q2ZWZiNiIsCgkJIkNyZWF0ZURhdGUiOiAiMjAxNi0xMi0wOFQxNDowMjozOS43NTEtMDU6MDAiLAoJCSJVcGRhdGVEYXRlIjogIjIwMTYtMTItMDhUMTQ6MDI6MzkuNzUxLTA1OjAwIiwKCQkiTGFzdFVwZGF0ZUlkIjogIjU3ZDliMzgzZGNiYTBmNTExNzJmMWY1NyIsCgkJIkJvb3RzdHJhcE1ldGEiOiB7CgkJCSJWZXJzaW9uIjogMCwKCQkJIkRvbWFpbiI6ICIiLAoJCQkiUmVsZWFzZU1vZGUiOiAiIiwKCQkJIlByb2R1Y3ROYW1lIjogIiIsCgkJCSJEb21haW5zIjogbnVsbCwKCQkJIlByb2R1Y3ROYW1lcyI6IG51bGwsCgkJCSJEZWxldGVSb3ciOiBmYWxzZSwKCQkJIkFsd2F5c1VwZGF0ZSI6IHRydWUKCQl9LAoJCSJFcnJvcnMiOiB7CgkJCSJJZCI6ICIiLAoJCQkiS2V5IjogIiIsCgkJCSJOYW1lIjogIiIsCgkJCSJEZXNjcmlwdGlvbiI6ICIiLAoJCQkiRmVhdHVyZUdyb3VwSWQiOiAiIgoJCX0sCgkJIlZpZXdzIjogewoJCQkiVXBkYXRlRGF0ZSI6ICIiLAoJCQkiVXBkYXRlRnJvbU5vdyI6ICIiCgkJfSwKCQkiSm9pbnMiOiB7fQoJfSwKCXsKCQkiSWQiOiAiNTg0OWFlNGYxZDQxYzg2YTgzZDZlZmI5IiwKCQkiS2V5IjogIlJPTEVfTU9ESUZZIiwKCQkiTmFtZSI6ICJNb2RpZnkgcm9sZXMiLAoJCSJEZXNjcmlwdGlvbiI6ICJBYmlsaXR5IHRvIG1vZGlmeSByb2xlcyIsCgkJIkZlYXR1cmVHcm91cElkIjogIjU4NDlhZTRmMWQ0MWM4NmE4M2Q2ZWZiNiIsCgkJIkNyZWF0ZURhdGUiOiAiMjAxNi0xMi0wOFQxNDowMjozOS43NTEtMDU6MDAiLAoJCSJVcGRhdGVEYXRlIjogIjIwMTYtMTItMDhUMTQ6MDI6MzkuNzUxLTA1OjAwIiwKCQkiTGFzdFVwZGF0ZUlkIjogIjU3ZDliMzgzZGNiYTBmNTExNzJmMWY1NyIsCgkJIkJvb3RzdHJhcE1ldGEiOiB7CgkJCSJWZXJzaW9uIjogMCwKCQkJIkRvbWFpbiI6ICIiLAoJCQkiUmVsZWFzZU1vZGUiOiAiIiwKCQkJIlByb2R1Y3ROYW1lIjogIiIsCgkJCSJEb21haW5zIjogbnVsbCwKCQkJIlByb2R1Y3ROYW1lcyI6IG51bGwsCgkJCSJEZWxldGVSb3ciOiBmYWxzZSwKCQkJIkFsd2F5c1VwZGF0ZSI6IHRydWUKCQl9LAoJCSJFcnJvcnMiOiB7CgkJCSJJZCI6ICIiLAoJCQkiS2V5IjogIiIsCgkJCSJOYW1lIjogIiIsCgkJCSJEZXNjcmlwdGlvbiI6ICIiLAoJCQkiRmVhdHVyZUdyb3VwSWQiOiAiIgoJCX0sCgkJIlZpZXdzIjogewoJCQkiVXBkYXRlRGF0ZSI6ICIiLAoJCQkiVXBkYXRlRnJvbU5vdyI6ICIiCgkJfSwKCQkiSm9pbnMiOiB7fQoJfSwKCXsKCQkiSWQiOiAiNTg0OWFlNGYxZDQxYzg2YTgzZDZlZmJhIiwKCQkiS2V5IjogIlJPTEVfREVMRVRFIiwKCQkiTmFtZSI6ICJEZWxldGUgcm9sZXMiLAoJCSJEZXNjcmlwdGlvbiI6ICJBYmlsaXR5IHRvIGRlbGV0ZSByb2xlcyIsCgkJIkZlYXR1cmVHcm91cElkIjogIjU4NDlhZTRmMWQ0MWM4NmE4M2Q2ZWZiNiIsCgkJIkNyZWF0ZURhdGUiOiAiMjAxNi0xMi0wOFQxNDowMjozOS43NTEtMDU6MDAiLAoJCSJVcGRhdGVEYXRlIjogIjIwMTYtMTItMDhUMTQ6MDI6MzkuNzUxLTA1OjAwIiwKCQkiTGFzdFVwZGF0ZUlkIjogIjU3ZDliMzgzZGNiYTBmNTExNzJmMWY1NyIsCgkJIkJvb3RzdHJhcE1ldGEiOiB7CgkJCSJWZXJzaW9uIjogMCwKCQkJIkRvbWFpbiI6ICIiLAoJCQkiUmVsZWFzZU1vZGUiOiAiIiwKCQkJIlByb2R1Y3ROYW1lIjogIiIsCgkJCSJEb21haW5zIjogbnVsbCwKCQkJIlByb2R1Y3ROYW1lcyI6IG51bGwsCgkJCSJEZWxldGVSb3ciOiBmYWxzZSwKCQkJIkFsd2F5c1VwZGF0ZSI6IHRydWUKCQl9LAoJCSJFcnJvcnMiOiB7CgkJCSJJZCI6ICIiLAoJCQkiS2V5IjogIiIsCgkJCSJOYW1lIjogIiIsCgkJCSJEZXNjcmlwdGlvbiI6ICIiLAoJCQkiRmVhdHVyZUdyb3VwSWQiOiAiIgoJCX0sCgkJIlZpZXdzIjogewoJCQkiVXBkYXRlRGF0ZSI6ICIiLAoJCQkiVXBkYXRlRnJvbU5vdyI6ICIiCgkJfSwKCQkiSm9pbnMiOiB7fQoJfSwKCXsKCQkiSWQiOiAiNTg0OWFlNGYxZDQxYzg2YTgzZDZlZmJjIiwKCQkiS2V5IjogIlJPTEVfQ09QWSIsCgkJIk5hbWUiOiAiQ29weSByb2xlIiwKCQkiRGVzY3JpcHRpb24iOiAiQWJpbGl0eSB0byBjb3B5IGEgcm9sZSIsCgkJIkZlYXR1cmVHcm91cElkIjogIjU4NDlhZTRmMWQ0MWM4NmE4M2Q2ZWZiNiIsCgkJIkNyZWF0ZURhdGUiOiAiMjAxNi0xMi0wOFQxNDowMjozOS43NTEtMDU6MDAiLAoJCSJVcGRhdGVEYXRlIjogIjIwMTYtMTItMDhUMTQ6MDI6MzkuNzUxLTA1OjAwIiwKCQkiTGFzdFVwZGF0ZUlkIjogIjU3ZDliMzgzZGNiYTBmNTExNzJmMWY1NyIsCgkJIkJvb3RzdHJhcE1ldGEiOiB7CgkJCSJWZXJzaW9uIjogMCwKCQkJIkRvbWFpbiI6ICIiLAoJCQkiUmVsZWFzZU1vZGUiOiAiIiwKCQkJIlByb2R1Y3ROYW1lIjogIiIsCgkJCSJEb21haW5zIjogbnVsbCwKCQkJIlByb2R1Y3ROYW1lcyI6IG51bGwsCgkJCSJEZWxldGVSb3ciOiBmYWxzZSwKCQkJIkFsd2F5c1VwZGF0ZSI6IHRydWUKCQl9LAoJCSJFcnJvcnMiOiB7CgkJCSJJZCI6ICIiLAoJCQkiS2V5IjogIiIsCgkJCSJOYW1lIjogIiIsCgkJCSJEZXNjcmlwdGlvbiI6ICIiLAoJCQkiRmVhdHVyZUdyb3VwSWQiOiAiIgoJCX0sCgkJIlZpZXdzIjogewoJCQkiVXBkYXRlRGF0ZSI6ICIiLAoJCQkiVXBkYXRlRnJvbU5vdyI6ICIiCgkJfSwKCQkiSm9pbnMiOiB7fQoJfQpd";

pub const FEATURE_GROUPS: &str = "WwoJewoJCSJJZCI6ICI1ODQ1YzJkNTFkNDFjODBhNDA5Y2NlMmMiLAoJCSJOYW1lIjogIkFjY291bnQgUmVsYXRlZCIsCgkJIkFjY291bnRUeXBlIjogIiIsCgkJIkNyZWF0ZURhdGUiOiAiMjAxNi0xMi0wNVQxNDo0MTowOS4xNzQtMDU6MDAiLAoJCSJVcGRhdGVEYXRlIjogIjIwMTYtMTItMDVUMTc6NTU6NTkuMzMzLTA1OjAwIiwKCQkiTGFzdFVwZGF0ZUlkIjogIjU3ZDliMzgzZGNiYTBmNTExNzJmMWY1NyIsCgkJIkJvb3RzdHJhcE1ldGEiOiB7CgkJCSJWZXJzaW9uIjogMCwKCQkJIkRvbWFpbiI6ICIiLAoJCQkiUmVsZWFzZU1vZGUiOiAiIiwKCQkJIlByb2R1Y3ROYW1lIjogIiIsCgkJCSJEb21haW5zIjogbnVsbCwKCQkJIlByb2R1Y3ROYW1lcyI6IG51bGwsCgkJCSJEZWxldGVSb3ciOiBmYWxzZSwKCQkJIkFsd2F5c1VwZGF0ZSI6IHRydWUKCQl9LAoJCSJFcnJvcnMiOiB7CgkJCSJJZCI6ICIiLAoJCQkiTmFtZSI6ICIiLAoJCQkiQWNjb3VudFR5cGUiOiAiIgoJCX0sCgkJIlZpZXdzIjogewoJCQkiVXBkYXRlRGF0ZSI6ICIiLAoJCQkiVXBkYXRlRnJvbU5vdyI6ICIiCgkJfSwKCQkiSm9pbnMiOiB7fQoJfSwKCXsKCQkiSWQiOiAiNTg0ODM4OGMxZDQxYzgyN2I0ZTE0ZGQ2IiwKCQkiTmFtZSI6ICJVc2VyIFJlbGF0ZWQiLAoJCSJBY2NvdW50VHlwZSI6ICIiLAoJCSJDcmVhdGVEYXRlIjogIjIwMTYtMTItMDdUMTE6Mjc6NTYuOTM5LTA1OjAwIiwKCQkiVXBkYXRlRGF0ZSI6ICIyMDE2LTEyLTA3VDExOjQ5OjA4LjU2MS0wNTowMCIsCgkJIkxhc3RVcGRhdGVJZCI6ICI1N2Q5YjM4M2RjYmEwZjUxMTcyZjFmNTciLAoJCSJCb290c3RyYXBNZXRhIjogewoJCQkiVmVyc2lvbiI6IDAsCgkJCSJEb21haW4iOiAiIiwKCQkJIlJlbGVhc2VNb2RlIjogIiIsCgkJCSJQcm9kdWN0TmFtZSI6ICIiLAoJCQkiRG9tYWlucyI6IG51bGwsCgkJCSJQcm9kdWN0TmFtZXMiOiBudWxsLAoJCQkiRGVsZXRlUm93IjogZmFsc2UsCgkJCSJBbHdheXNVcGRhdGUiOiB0cnVlCgkJfSwKCQkiRXJyb3JzIjogewoJCQkiSWQiOiAiIiwKCQkJIk5hbWUiOiAiIiwKCQkJIkFjY291bnRUeXBlIjogIiIKCQl9LAoJCSJWaWV3cyI6IHsKCQkJIlVwZGF0ZURhdGUiOiAiIiwKCQkJIlVwZGF0ZUZyb21Ob3ciOiAiIgoJCX0sCgkJIkpvaW5zIjoge30KCX0sCgl7CgkJIklkIjogIjU4NDgzODhjMWQ0MWM4MjdiNGUxNGRkZCIsCgkJIk5hbWUiOiAiU2VydmVyIFNldHRpbmcgUmVsYXRlZCIsCgkJIkFjY291bnRUeXBlIjogIiIsCgkJIkNyZWF0ZURhdGUiOiAiMjAxNi0xMi0wN1QxMToyNzo1Ni45NC0wNTowMCIsCgkJIlVwZGF0ZURhdGUiOiAiMjAxNi0xMi0wN1QxMToyNzo1Ni45NC0wNTowMCIsCgkJIkxhc3RVcGRhdGVJZCI6ICI1N2Q5YjM4M2RjYmEwZjUxMTcyZjFmNTciLAoJCSJCb290c3RyYXBNZXRhIjogewoJCQkiVmVyc2lvbiI6IDAsCgkJCSJEb21haW4iOiAiIiwKCQkJIlJlbGVhc2VNb2RlIjogIiIsCgkJCSJQcm9kdWN0TmFtZSI6ICIiLAoJCQkiRG9tYWlucyI6IG51bGwsCgkJCSJQcm9kdWN0TmFtZXMiOiBudWxsLAoJCQkiRGVsZXRlUm93IjogZmFsc2UsCgkJCSJBbHdheXNVcGRhdGUiOiB0cnVlCgkJfSwKCQkiRXJyb3JzIjogewoJCQkiSWQiOiAiIiwKCQkJIk5hbWUiOiAiIiwKCQkJIkFjY291bnRUeXBlIjogIiIKCQl9LAoJCSJWaWV3cyI6IHsKCQkJIlVwZGF0ZURhdGUiOiAiIiwKCQkJIlVwZGF0ZUZyb21Ob3ciOiAiIgoJCX0sCgkJIkpvaW5zIjoge30KCX0sCgl7CgkJIklkIjogIjU4NDlhZTRmMWQ0MWM4NmE4M2Q2ZWZiNiIsCgkJIk5hbWUiOiAiUm9sZSBSZWxhdGVkIiwKCQkiQWNjb3VudFR5cGUiOiAiIiwKCQkiQ3JlYXRlRGF0ZSI6ICIyMDE2LTEyLTA4VDE0OjAyOjM5Ljc0OC0wNTowMCIsCgkJIlVwZGF0ZURhdGUiOiAiMjAxNi0xMi0wOFQxNDowMjozOS43NDgtMDU6MDAiLAoJCSJMYXN0VXBkYXRlSWQiOiAiNTdkOWIzODNkY2JhMGY1MTE3MmYxZjU3IiwKCQkiQm9vdHN0cmFwTWV0YSI6IHsKCQkJIlZlcnNpb24iOiAwLAoJCQkiRG9tYWluIjogIiIsCgkJCSJSZWxlYXNlTW9kZSI6ICIiLAoJCQkiUHJvZHVjdE5hbWUiOiAiIiwKCQkJIkRvbWFpbnMiOiBudWxsLAoJCQkiUHJvZHVjdE5hbWVzIjogbnVsbCwKCQkJIkRlbGV0ZVJvdyI6IGZhbHNlLAoJCQkiQWx3YXlzVXBkYXRlIjogdHJ1ZQoJCX0sCgkJIkVycm9ycyI6IHsKCQkJIklkIjogIiIsCgkJCSJOYW1lIjogIiIsCgkJCSJBY2NvdW50VHlwZSI6ICIiCgkJfSwKCQkiVmlld3MiOiB7CgkJCSJVcGRhdGVEYXRlIjogIiIsCgkJCSJVcGRhdGVGcm9tTm93IjogIiIKCQl9LAoJCSJKb2lucyI6IHt9Cgl9Cl0=";

pub const PASSWORDS: &str = "WwoJewogICAgIklkIjogIjU3Y2YyYjgxZjM2ZDI4NjZlZTM3YzBjNSIsCiAgICAiVmFsdWUiOiAiJDJhJDEyJC5jbmlaQzhPTFJvQlVvRExsMXVBZk9ld01xV3JuNnJ1QWpIczFKbmZKMHFDbFhjeUMwdmJ5IgoJfQpdCg==";

pub const ROLES: &str = "WwoJewoJCSJJZCI6IjU3YzA3ZWYzZGNiYTBmN2EwYmUzMzhiOCIsCgkJIk5hbWUiOiJBY2NvdW50IEFkbWluaXN0cmF0b3IiLAoJCSJBY2NvdW50SWQiOiIiLAoJCSJDYW5EZWxldGUiOmZhbHNlLAoJCSJDcmVhdGVEYXRlIjoiMjAxNi0wOC0yNlQxMDo0OTowNC42MzA1MzY0NDYtMDQ6MDAiLAoJCSJVcGRhdGVEYXRlIjoiMjAxNi0wOC0yNlQxMDo0OTowNC42MzA1MzY0NDYtMDQ6MDAiLAoJCSJBY2NvdW50VHlwZSI6ImN1c3QiLAoJCSJCb290c3RyYXBNZXRhIjogewoJCQkiVmVyc2lvbiI6IDAsCgkJCSJEb21haW4iOiAiIiwKCQkJIlJlbGVhc2VNb2RlIjogIiIsCgkJCSJQcm9kdWN0TmFtZSI6ICIiLAoJCQkiRG9tYWlucyI6IG51bGwsCgkJCSJQcm9kdWN0TmFtZXMiOiBudWxsLAoJCQkiRGVsZXRlUm93IjogZmFsc2UsCgkJCSJBbHdheXNVcGRhdGUiOiB0cnVlCgkJfSwKCQkiU2hvcnROYW1lIjoiQURNSU4iLAoJCSJMYXN0VXBkYXRlSWQiOiI1N2Q5YjM4M2RjYmEwZjUxMTcyZjFmNTciCgl9Cl0K";

pub const SERVER_SETTINGS: &str = "WwoJewoJCSJJZCI6ICI1N2ZiYTRiYjA0MTI0NTJkNmQ1MjQ4YzYiLAoJCSJOYW1lIjogIkxvY2tvdXQgQXR0ZW1wdHMiLAoJCSJLZXkiOiAibG9ja291dEF0dGVtcHRzIiwKCQkiQ2F0ZWdvcnkiOiAidXNlcnMiLAoJCSJWYWx1ZSI6ICIwIiwKCQkiQ3JlYXRlRGF0ZSI6IjIwMTYtMDgtMjZUMTA6NDk6MDQuNjMwNTM2NDQ2LTA0OjAwIiwKCQkiVXBkYXRlRGF0ZSI6IjIwMTYtMDgtMjZUMTA6NDk6MDQuNjMwNTM2NDQ2LTA0OjAwIiwKCQkiTGFzdFVwZGF0ZUlkIjoiNTdkOWIzODNkY2JhMGY1MTE3MmYxZjU3IiwKCQkiQm9vdHN0cmFwTWV0YSI6IHsKCQkJIkFsd2F5c1VwZGF0ZSI6IGZhbHNlCgkJfQoJfSwKCXsKCQkiSWQiOiAiNTk3ZTMxNTQ2MGU2NTdkOWI3MDU2M2FhIiwKCQkiTmFtZSIgOiAiVGltZSBab25lIiwKCQkiS2V5IiA6ICJUaW1lWm9uZSIsCgkJIkNhdGVnb3J5IiA6ICJ0aW1lU2V0dGluZ3MiLAoJCSJWYWx1ZSIgOiAiMCIsCgkJIkFueSIgOiAiMTkyLjE2OC4wLjEiLAoJCSJDcmVhdGVEYXRlIjoiMjAxNi0wOC0yNlQxMDo0OTowNC42MzA1MzY0NDYtMDQ6MDAiLAoJCSJVcGRhdGVEYXRlIjoiMjAxNi0wOC0yNlQxMDo0OTowNC42MzA1MzY0NDYtMDQ6MDAiLAoJCSJMYXN0VXBkYXRlSWQiOiI1N2Q5YjM4M2RjYmEwZjUxMTcyZjFmNTciLAoJCSJCb290c3RyYXBNZXRhIjogewoJCQkiQWx3YXlzVXBkYXRlIjogZmFsc2UKCQl9Cgl9Cl0K";

pub const USERS: &str = "WwoJewoJCSJJZCI6ICI1ODQwNWI3OWY5NGM2NzFiMDUzNTA4NTgiLAoJCSJGaXJzdCI6ICJBZG1pbiIsCgkJIkxhc3QiOiAiQWRtaW4iLAoJCSJFbWFpbCI6ICJhZG1pbiIsCgkJIlBhc3N3b3JkSWQiOiAiNTdjZjJiODFmMzZkMjg2NmVlMzdjMGM1IiwKCQkiRGVmYXVsdEFjY291bnRJZCI6ICI1ODQwNTcxOGY5NGM2NzFiMDUzNTA4NTciLAoJCSJDcmVhdGVEYXRlIjoiMjAxNi0wOC0yNlQxMDo0OTowNC42MzA1MzY0NDYtMDQ6MDAiLAoJCSJVcGRhdGVEYXRlIjoiMjAxNi0wOC0yNlQxMDo0OTowNC42MzA1MzY0NDYtMDQ6MDAiLAoJCSJMYXN0TG9naW5EYXRlIjogIjIwMTYtMDgtMjZUMTA6NDk6MDQuNjMwNTM2NDQ2LTA0OjAwIiwKCQkiTGFzdExvZ2luSVAiOiAiIiwKCQkiTGFuZ3VhZ2UiOiAiZW4iLAoJCSJUaW1lWm9uZSI6ICJVUy9FYXN0ZXJuIiwKCQkiRGF0ZUZvcm1hdCI6ICJtbS9kZC95eXl5IiwKCQkiTGFzdFVwZGF0ZUlkIjoiNTdkOWIzODNkY2JhMGY1MTE3MmYxZjU3IiwKCQkiRW5mb3JjZVBhc3N3b3JkQ2hhbmdlIjogdHJ1ZSwKCQkiQm9vdHN0cmFwTWV0YSI6IHsKCQl9Cgl9LAoJewoJCSJJZCI6ICI1N2Q5YjM4M2RjYmEwZjUxMTcyZjFmNTciLAoJCSJGaXJzdCI6ICJTeXN0ZW0iLAoJCSJMYXN0IjogIlN5c3RlbSIsCgkJIkVtYWlsIjogImFub255bW91c0BzeXN0ZW0uY29tIiwKCQkiUGFzc3dvcmRJZCI6ICIiLAoJCSJEZWZhdWx0QWNjb3VudElkIjogIiIsCgkJIkNyZWF0ZURhdGUiOiIyMDE2LTA4LTI2VDEwOjQ5OjA0LjYzMDUzNjQ0Ni0wNDowMCIsCgkJIlVwZGF0ZURhdGUiOiIyMDE2LTA4LTI2VDEwOjQ5OjA0LjYzMDUzNjQ0Ni0wNDowMCIsCgkJIkxhc3RMb2dpbkRhdGUiOiAiMjAxNi0wOC0yNlQxMDo0OTowNC42MzA1MzY0NDYtMDQ6MDAiLAoJCSJMYXN0TG9naW5JUCI6ICIiLAoJCSJMYXN0VXBkYXRlSWQiOiI1N2Q5YjM4M2RjYmEwZjUxMTcyZjFmNTciCgl9LAoJewoJCSJJZCI6ICI1ODM1ZWI2MWU5ZjEyODNkNDk1MTE0YzEiLAoJCSJGaXJzdCI6ICJDcm9uIiwKCQkiTGFzdCI6ICJKb2IiLAoJCSJFbWFpbCI6ICJjcm9uam9iQHN5c3RlbS5jb20iLAoJCSJQYXNzd29yZElkIjogIiIsCgkJIkRlZmF1bHRBY2NvdW50SWQiOiAiIiwKCQkiQ3JlYXRlRGF0ZSI6IjIwMTYtMDgtMjZUMTA6NDk6MDQuNjMwNTM2NDQ2LTA0OjAwIiwKCQkiVXBkYXRlRGF0ZSI6IjIwMTYtMDgtMjZUMTA6NDk6MDQuNjMwNTM2NDQ2LTA0OjAwIiwKCQkiTGFzdExvZ2luRGF0ZSI6ICIyMDE2LTA4LTI2VDEwOjQ5OjA0LjYzMDUzNjQ0Ni0wNDowMCIsCgkJIkxhc3RMb2dpbklQIjogIiIsCgkJIkxhc3RVcGRhdGVJZCI6IjU3ZDliMzgzZGNiYTBmNTExNzJmMWY1NyIKCX0KXQo=";
